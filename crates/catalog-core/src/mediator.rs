//! In-process mediator that routes commands and queries to their handlers.
//!
//! ```text
//! Mediator::send(request)
//!   ↓  EndRequestBehavior   (span, timing, outcome log)
//!   ↓  ValidationBehavior   (runs every registered Validator<R>)
//!   ↓  RequestHandler<R>
//! ```
//!
//! Each request type has exactly one handler. Behaviors wrap the handler in
//! registration order; the first behavior is the outermost one.

use crate::{BoxFuture, CatalogError, CatalogResult, ValidationFailures};
use async_trait::async_trait;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info_span, warn, Instrument};
use uuid::Uuid;

/// A command or query that can be sent through the [`Mediator`].
pub trait Request: Send + Sync + 'static {
    /// What the handler returns on success.
    type Response: Send + 'static;

    /// Name used in logs and error messages.
    const NAME: &'static str;
}

/// Executes one request type.
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    async fn handle(&self, request: R) -> CatalogResult<R::Response>;
}

/// Checks a request before its handler runs.
///
/// Returning an empty [`ValidationFailures`] means the request is valid.
/// `Err` is reserved for infrastructure faults hit while validating.
#[async_trait]
pub trait Validator<R: Request>: Send + Sync {
    async fn validate(&self, request: &R) -> CatalogResult<ValidationFailures>;
}

/// A step wrapped around a handler.
#[async_trait]
pub trait PipelineBehavior<R: Request>: Send + Sync {
    async fn handle(&self, request: R, next: Next<'_, R>) -> CatalogResult<R::Response>;
}

/// The remainder of a pipeline, handed to each behavior.
pub struct Next<'a, R: Request> {
    behaviors: &'a [Arc<dyn PipelineBehavior<R>>],
    handler: &'a dyn RequestHandler<R>,
}

impl<'a, R: Request> Next<'a, R> {
    /// Invokes the next behavior, or the handler once behaviors run out.
    pub fn run(self, request: R) -> BoxFuture<'a, R::Response> {
        match self.behaviors.split_first() {
            Some((behavior, rest)) => behavior.handle(
                request,
                Next {
                    behaviors: rest,
                    handler: self.handler,
                },
            ),
            None => self.handler.handle(request),
        }
    }
}

/// Opens a span per request and logs how it ended.
#[derive(Debug, Default, Clone, Copy)]
pub struct EndRequestBehavior;

#[async_trait]
impl<R: Request> PipelineBehavior<R> for EndRequestBehavior {
    async fn handle(&self, request: R, next: Next<'_, R>) -> CatalogResult<R::Response> {
        let request_id = Uuid::new_v4();
        let span = info_span!("mediator", request = R::NAME, %request_id);
        let started = Instant::now();

        let result = next.run(request).instrument(span).await;

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        match &result {
            Ok(_) => debug!(request = R::NAME, %request_id, elapsed_ms, "Request completed"),
            Err(e) if e.status_code() >= 500 => error!(
                request = R::NAME,
                %request_id,
                elapsed_ms,
                error_code = e.error_code(),
                "Request failed: {}",
                e
            ),
            Err(e) => warn!(
                request = R::NAME,
                %request_id,
                elapsed_ms,
                error_code = e.error_code(),
                "Request rejected: {}",
                e
            ),
        }

        result
    }
}

/// Runs every validator for a request and aggregates their failures.
pub struct ValidationBehavior<R: Request> {
    validators: Vec<Arc<dyn Validator<R>>>,
}

impl<R: Request> ValidationBehavior<R> {
    #[must_use]
    pub fn new(validators: Vec<Arc<dyn Validator<R>>>) -> Self {
        Self { validators }
    }
}

#[async_trait]
impl<R: Request> PipelineBehavior<R> for ValidationBehavior<R> {
    async fn handle(&self, request: R, next: Next<'_, R>) -> CatalogResult<R::Response> {
        let mut failures = ValidationFailures::new();
        for validator in &self.validators {
            failures.extend(validator.validate(&request).await?);
        }

        if !failures.is_empty() {
            debug!(
                request = R::NAME,
                failures = failures.len(),
                "Request failed validation"
            );
            return Err(CatalogError::Validation(failures));
        }

        next.run(request).await
    }
}

struct Pipeline<R: Request> {
    handler: Arc<dyn RequestHandler<R>>,
    behaviors: Vec<Arc<dyn PipelineBehavior<R>>>,
}

/// Routes each request to the single pipeline registered for its type.
pub struct Mediator {
    pipelines: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Mediator {
    /// Starts an empty registration.
    #[must_use]
    pub fn builder() -> MediatorBuilder {
        MediatorBuilder::default()
    }

    /// Sends a request through its pipeline.
    pub async fn send<R: Request>(&self, request: R) -> CatalogResult<R::Response> {
        let pipeline = self
            .pipeline::<R>()
            .ok_or_else(|| CatalogError::internal(format!("No handler registered for {}", R::NAME)))?;

        Next {
            behaviors: &pipeline.behaviors,
            handler: pipeline.handler.as_ref(),
        }
        .run(request)
        .await
    }

    /// Returns true when a handler is registered for `R`.
    #[must_use]
    pub fn handles<R: Request>(&self) -> bool {
        self.pipeline::<R>().is_some()
    }

    fn pipeline<R: Request>(&self) -> Option<&Pipeline<R>> {
        self.pipelines
            .get(&TypeId::of::<R>())
            .and_then(|pipeline| pipeline.downcast_ref::<Pipeline<R>>())
    }
}

impl fmt::Debug for Mediator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mediator")
            .field("pipelines", &self.pipelines.len())
            .finish()
    }
}

/// Collects handler registrations for a [`Mediator`].
#[derive(Default)]
pub struct MediatorBuilder {
    pipelines: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl MediatorBuilder {
    /// Registers a handler without validators.
    #[must_use]
    pub fn register<R, H>(self, handler: H) -> Self
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        self.register_with_validators(handler, Vec::new())
    }

    /// Registers a handler guarded by a single validator.
    #[must_use]
    pub fn register_validated<R, H, V>(self, handler: H, validator: V) -> Self
    where
        R: Request,
        H: RequestHandler<R> + 'static,
        V: Validator<R> + 'static,
    {
        let validator: Arc<dyn Validator<R>> = Arc::new(validator);
        self.register_with_validators(handler, vec![validator])
    }

    /// Registers a handler wrapped by the default behaviors.
    #[must_use]
    pub fn register_with_validators<R, H>(
        self,
        handler: H,
        validators: Vec<Arc<dyn Validator<R>>>,
    ) -> Self
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        let behaviors: Vec<Arc<dyn PipelineBehavior<R>>> = vec![
            Arc::new(EndRequestBehavior),
            Arc::new(ValidationBehavior::new(validators)),
        ];
        self.register_pipeline(Arc::new(handler), behaviors)
    }

    /// Registers a handler with an explicit behavior chain.
    #[must_use]
    pub fn register_pipeline<R: Request>(
        mut self,
        handler: Arc<dyn RequestHandler<R>>,
        behaviors: Vec<Arc<dyn PipelineBehavior<R>>>,
    ) -> Self {
        let pipeline: Box<dyn Any + Send + Sync> = Box::new(Pipeline { handler, behaviors });
        if self.pipelines.insert(TypeId::of::<R>(), pipeline).is_some() {
            warn!(request = R::NAME, "Replacing previously registered handler");
        }
        self
    }

    #[must_use]
    pub fn build(self) -> Mediator {
        debug!(pipelines = self.pipelines.len(), "Mediator built");
        Mediator {
            pipelines: self.pipelines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct Greet {
        name: String,
    }

    impl Request for Greet {
        type Response = String;
        const NAME: &'static str = "Greet";
    }

    struct Unregistered;

    impl Request for Unregistered {
        type Response = ();
        const NAME: &'static str = "Unregistered";
    }

    #[derive(Default)]
    struct GreetHandler {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl RequestHandler<Greet> for GreetHandler {
        async fn handle(&self, request: Greet) -> CatalogResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("Hello, {}", request.name))
        }
    }

    struct NameRequired;

    #[async_trait]
    impl Validator<Greet> for NameRequired {
        async fn validate(&self, request: &Greet) -> CatalogResult<ValidationFailures> {
            let mut failures = ValidationFailures::new();
            if request.name.trim().is_empty() {
                failures.add("name", "Name is required.");
            }
            Ok(failures)
        }
    }

    struct NameLength;

    #[async_trait]
    impl Validator<Greet> for NameLength {
        async fn validate(&self, request: &Greet) -> CatalogResult<ValidationFailures> {
            let mut failures = ValidationFailures::new();
            if request.name.len() < 3 {
                failures.add("name", "Name is too short.");
            }
            Ok(failures)
        }
    }

    struct Recording {
        label: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl PipelineBehavior<Greet> for Recording {
        async fn handle(&self, request: Greet, next: Next<'_, Greet>) -> CatalogResult<String> {
            self.log.lock().unwrap().push(format!("enter {}", self.label));
            let result = next.run(request).await;
            self.log.lock().unwrap().push(format!("leave {}", self.label));
            result
        }
    }

    #[tokio::test]
    async fn test_send_routes_to_handler() {
        let mediator = Mediator::builder()
            .register::<Greet, _>(GreetHandler::default())
            .build();

        let reply = mediator
            .send(Greet {
                name: "catalog".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(reply, "Hello, catalog");
        assert!(mediator.handles::<Greet>());
        assert!(!mediator.handles::<Unregistered>());
    }

    #[tokio::test]
    async fn test_unregistered_request_fails() {
        let mediator = Mediator::builder().build();
        let err = mediator.send(Unregistered).await.unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
        assert!(err.to_string().contains("Unregistered"));
    }

    #[tokio::test]
    async fn test_invalid_request_never_reaches_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler = GreetHandler {
            calls: Arc::clone(&calls),
        };
        let mediator = Mediator::builder()
            .register_validated::<Greet, _, _>(handler, NameRequired)
            .build();

        let err = mediator
            .send(Greet {
                name: "  ".to_string(),
            })
            .await
            .unwrap_err();

        assert!(err.validation_failures().unwrap().has_error_for("name"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failures_from_all_validators_are_merged() {
        let validators: Vec<Arc<dyn Validator<Greet>>> =
            vec![Arc::new(NameRequired), Arc::new(NameLength)];
        let mediator = Mediator::builder()
            .register_with_validators::<Greet, _>(GreetHandler::default(), validators)
            .build();

        let err = mediator
            .send(Greet {
                name: String::new(),
            })
            .await
            .unwrap_err();

        let failures = err.validation_failures().unwrap();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures.errors()[0].message, "Name is required.");
        assert_eq!(failures.errors()[1].message, "Name is too short.");
    }

    #[tokio::test]
    async fn test_behaviors_wrap_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let behaviors: Vec<Arc<dyn PipelineBehavior<Greet>>> = vec![
            Arc::new(Recording {
                label: "outer",
                log: Arc::clone(&log),
            }),
            Arc::new(Recording {
                label: "inner",
                log: Arc::clone(&log),
            }),
        ];
        let mediator = Mediator::builder()
            .register_pipeline::<Greet>(Arc::new(GreetHandler::default()), behaviors)
            .build();

        mediator
            .send(Greet {
                name: "order".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec!["enter outer", "enter inner", "leave inner", "leave outer"]
        );
    }
}
