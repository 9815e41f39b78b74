use super::entities::ChartSpec;
use crate::domain::errors::UiResult;

/// Constructs and disposes chart widgets. The lifecycle manager is the only
/// caller; it guarantees `dispose` runs before a replacement is constructed.
pub trait ChartRenderer {
    type Instance;

    fn canvas_exists(&self, canvas_id: &str) -> bool;

    fn construct(&self, canvas_id: &str, spec: &ChartSpec) -> UiResult<Self::Instance>;

    fn dispose(&self, instance: Self::Instance);
}
