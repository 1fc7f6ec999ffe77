use super::error::TriggerError;
use super::types::{ActivationOutcome, TriggerConfig};
use super::validation::validate_config;
use crate::platform::Platform;
use crate::ports::{ActivationHandler, ControlBinding, ControlPort, LoggerPort};
use crate::time_it;
use futures::FutureExt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

pub const STARTED_MESSAGE: &str = "Remote process started successfully.";
pub const REJECTED_MESSAGE: &str = "Failed to start the remote process.";

// console.time labels must not collide between overlapping activations
static ACTIVATION_SEQ: AtomicU64 = AtomicU64::new(0);

/// Sends one start request and logs its outcome.
///
/// Every activation is a fresh request and overlapping activations never wait
/// on each other; the sequence number only keeps debug timers apart.
pub async fn activate(platform: &Platform, config: &TriggerConfig) -> ActivationOutcome {
    let seq = ACTIVATION_SEQ.fetch_add(1, Ordering::Relaxed);
    let label = format!("POST {} #{seq}", config.endpoint);
    let outcome = time_it!(platform, &label, {
        match platform.transport().post(&config.endpoint).await {
            Ok(status) => ActivationOutcome::from_status(status),
            Err(err) => ActivationOutcome::TransportFailure {
                cause: err.cause().to_string(),
            },
        }
    });
    report(platform.logger(), &config.endpoint, &outcome);
    outcome
}

/// Exactly one entry per outcome: info on success, error otherwise.
pub fn report(logger: &dyn LoggerPort, endpoint: &str, outcome: &ActivationOutcome) {
    match outcome {
        ActivationOutcome::Success { .. } => logger.log(STARTED_MESSAGE),
        ActivationOutcome::RemoteRejected { .. } => logger.error(REJECTED_MESSAGE),
        ActivationOutcome::TransportFailure { cause } => {
            logger.error(&format!("Request to {endpoint} failed: {cause}"))
        }
    }
}

/// Validates `config` and subscribes `activate` to the configured control.
pub fn install(
    platform: &Platform,
    controls: &dyn ControlPort,
    config: TriggerConfig,
) -> Result<Box<dyn ControlBinding>, TriggerError> {
    validate_config(&config)?;

    let control_id = config.control_id.clone();
    let event = config.event.clone();
    let platform = platform.clone();
    let config = Rc::new(config);

    let handler: ActivationHandler = Rc::new(move || {
        let platform = platform.clone();
        let config = config.clone();
        async move { activate(&platform, &config).await }.boxed_local()
    });

    controls.bind(&control_id, &event, handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::shared::{
        LogLevel, RecordingLogger, ScriptedReply, ScriptedTransport, SimulatedControls,
    };
    use crate::domain::trigger::{HttpStatus, TransportError};
    use crate::measure::set_debug_mode;
    use crate::ports::TransportPort;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use futures::future::join_all;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Arc;
    use std::task::{Context, Poll};

    /// Pending on first poll, ready on the second.
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    /// Answers 200 only after yielding, so joined activations overlap.
    struct SlowTransport;

    #[async_trait(?Send)]
    impl TransportPort for SlowTransport {
        async fn post(&self, _endpoint: &str) -> Result<HttpStatus, TransportError> {
            YieldOnce(false).await;
            Ok(HttpStatus(200))
        }
    }

    fn platform_with(transport: ScriptedTransport) -> (Platform, &'static RecordingLogger, Arc<ScriptedTransport>) {
        let logger = RecordingLogger::new().leak();
        let transport = Arc::new(transport);
        let platform = Platform::new()
            .with_logger(logger)
            .with_transport(transport.clone());
        (platform, logger, transport)
    }

    #[test]
    fn test_activate_issues_one_post_to_start() {
        let (platform, _, transport) = platform_with(ScriptedTransport::responding(200));
        block_on(activate(&platform, &TriggerConfig::default()));
        assert_eq!(transport.requests(), vec!["/start".to_string()]);
    }

    #[test]
    fn test_success_logs_one_info_entry() {
        let (platform, logger, _) = platform_with(ScriptedTransport::responding(200));
        let outcome = block_on(activate(&platform, &TriggerConfig::default()));

        assert_eq!(outcome, ActivationOutcome::Success { status: 200 });
        assert_eq!(logger.messages(LogLevel::Info), vec![STARTED_MESSAGE.to_string()]);
        assert_eq!(logger.count(LogLevel::Error), 0);
    }

    #[test]
    fn test_rejection_logs_one_error_entry() {
        let (platform, logger, _) = platform_with(ScriptedTransport::responding(500));
        let outcome = block_on(activate(&platform, &TriggerConfig::default()));

        assert_eq!(outcome, ActivationOutcome::RemoteRejected { status: 500 });
        assert_eq!(logger.messages(LogLevel::Error), vec![REJECTED_MESSAGE.to_string()]);
        assert_eq!(logger.count(LogLevel::Info), 0);
    }

    #[test]
    fn test_transport_failure_logs_distinct_error_with_cause() {
        let (platform, logger, _) =
            platform_with(ScriptedTransport::failing("connection refused"));
        let outcome = block_on(activate(&platform, &TriggerConfig::default()));

        assert_eq!(
            outcome,
            ActivationOutcome::TransportFailure {
                cause: "connection refused".to_string()
            }
        );
        let errors = logger.messages(LogLevel::Error);
        assert_eq!(errors.len(), 1);
        assert_ne!(errors[0], REJECTED_MESSAGE);
        assert!(errors[0].contains("connection refused"));
        assert!(errors[0].contains("/start"));
        assert_eq!(logger.count(LogLevel::Info), 0);
    }

    #[test]
    fn test_redirect_status_is_a_rejection() {
        let (platform, _, _) = platform_with(ScriptedTransport::responding(302));
        let outcome = block_on(activate(&platform, &TriggerConfig::default()));
        assert_eq!(outcome, ActivationOutcome::RemoteRejected { status: 302 });
    }

    #[test]
    fn test_rapid_activations_are_independent() {
        let (platform, logger, transport) = platform_with(
            ScriptedTransport::responding(200)
                .then(ScriptedReply::Status(500))
                .then(ScriptedReply::Failure("offline".to_string())),
        );
        let config = TriggerConfig::default();

        let outcomes = block_on(join_all((0..5).map(|_| activate(&platform, &config))));

        assert_eq!(transport.request_count(), 5);
        assert_eq!(outcomes.iter().filter(|o| o.is_success()).count(), 3);
        assert_eq!(logger.count(LogLevel::Info), 3);
        assert_eq!(logger.count(LogLevel::Error), 2);
    }

    #[test]
    fn test_repeated_successes_log_identical_sequences() {
        let (platform, logger, _) = platform_with(ScriptedTransport::responding(204));
        let config = TriggerConfig::default();

        block_on(activate(&platform, &config));
        let first: Vec<_> = logger
            .entries()
            .into_iter()
            .filter(|e| matches!(e.level, LogLevel::Info | LogLevel::Error))
            .collect();
        logger.clear();

        block_on(activate(&platform, &config));
        let second: Vec<_> = logger
            .entries()
            .into_iter()
            .filter(|e| matches!(e.level, LogLevel::Info | LogLevel::Error))
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_overlapping_activations_use_distinct_timer_labels() {
        let logger = RecordingLogger::new().leak();
        let platform = Platform::new()
            .with_logger(logger)
            .with_transport(Arc::new(SlowTransport));
        let config = TriggerConfig::default();

        set_debug_mode(true);
        let outcomes = block_on(join_all((0..2).map(|_| activate(&platform, &config))));
        set_debug_mode(false);

        assert!(outcomes.iter().all(ActivationOutcome::is_success));
        let mut started = logger.messages(LogLevel::TimeStart);
        let mut ended = logger.messages(LogLevel::TimeEnd);
        assert_eq!(started.len(), 2);
        assert_ne!(started[0], started[1]);
        started.sort();
        ended.sort();
        assert_eq!(started, ended);
        assert_eq!(logger.count(LogLevel::Info), 2);
        assert_eq!(logger.count(LogLevel::Error), 0);
    }

    #[test]
    fn test_custom_endpoint_is_used() {
        let (platform, _, transport) = platform_with(ScriptedTransport::responding(200));
        let config = TriggerConfig {
            endpoint: "/api/start".to_string(),
            ..TriggerConfig::default()
        };
        block_on(activate(&platform, &config));
        assert_eq!(transport.requests(), vec!["/api/start".to_string()]);
    }

    #[test]
    fn test_install_missing_control_is_configuration_error() {
        let (platform, _, transport) = platform_with(ScriptedTransport::responding(200));
        let controls = SimulatedControls::new();

        let result = install(&platform, &controls, TriggerConfig::default());

        assert!(matches!(result, Err(TriggerError::ControlNotFound(id)) if id == "startButton"));
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_install_rejects_invalid_config_before_binding() {
        let (platform, _, _) = platform_with(ScriptedTransport::responding(200));
        let controls = SimulatedControls::new().with_control("startButton");
        let config = TriggerConfig {
            endpoint: "start".to_string(),
            ..TriggerConfig::default()
        };

        let result = install(&platform, &controls, config);

        assert!(matches!(result, Err(TriggerError::InvalidConfig(_))));
        assert_eq!(controls.listener_count("startButton"), 0);
    }

    #[test]
    fn test_each_click_fires_its_own_request() {
        let (platform, logger, transport) = platform_with(ScriptedTransport::responding(200));
        let controls = SimulatedControls::new().with_control("startButton");
        let _binding = install(&platform, &controls, TriggerConfig::default()).unwrap();

        let pending: Vec<_> = (0..3).flat_map(|_| controls.click("startButton")).collect();
        block_on(join_all(pending));

        assert_eq!(transport.request_count(), 3);
        assert_eq!(logger.count(LogLevel::Info), 3);
    }

    #[test]
    fn test_detached_binding_stops_requests() {
        let (platform, _, transport) = platform_with(ScriptedTransport::responding(200));
        let controls = SimulatedControls::new().with_control("startButton");
        let binding = install(&platform, &controls, TriggerConfig::default()).unwrap();
        assert_eq!(binding.control_id(), "startButton");

        binding.detach().unwrap();

        assert!(controls.click("startButton").is_empty());
        assert_eq!(transport.request_count(), 0);
    }
}
