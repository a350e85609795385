use anemia_screen::screening::AnalyzerVariant;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_variant(raw: &str) -> Result<AnalyzerVariant, String> {
    raw.trim().parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_variant_accepts_endpoint_aliases() {
        assert_eq!(parse_variant(" simulate "), Ok(AnalyzerVariant::Simulation));
        assert_eq!(parse_variant("Analyze"), Ok(AnalyzerVariant::Full));
    }

    #[test]
    fn parse_variant_explains_rejections() {
        let err = parse_variant("bayesian").expect_err("unknown variant");
        assert!(err.contains("bayesian"));
    }
}
