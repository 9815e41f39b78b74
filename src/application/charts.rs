use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::{
    chart::{ChartHandle, ChartKey, ChartRenderer, ChartSpec, ChartState},
    logging::{LogComponent, get_logger},
};

/// Result of one `render` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// A fresh instance is live on this canvas.
    Rendered { canvas_id: &'static str },
    /// None of the key's canvases exist; nothing was touched.
    NoCanvas,
    /// The old instance was disposed but construction failed; the key is Absent.
    Failed,
}

/// Registry of live chart widgets, one per [`ChartKey`].
///
/// Per key the state is Absent or Live. Rendering a Live key disposes the
/// old instance first, so there is never more than one instance per key.
/// `render` is synchronous: dispose and construct for one key cannot
/// interleave with another render of the same key.
pub struct ChartLifecycleManager<R: ChartRenderer> {
    renderer: R,
    registry: RefCell<HashMap<ChartKey, ChartHandle<R::Instance>>>,
}

impl<R: ChartRenderer> ChartLifecycleManager<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer, registry: RefCell::new(HashMap::new()) }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn state(&self, key: ChartKey) -> ChartState {
        if self.registry.borrow().contains_key(&key) { ChartState::Live } else { ChartState::Absent }
    }

    pub fn live_count(&self) -> usize {
        self.registry.borrow().len()
    }

    /// Canvas the key's live instance is bound to, if any.
    pub fn live_canvas(&self, key: ChartKey) -> Option<&'static str> {
        self.registry.borrow().get(&key).map(|handle| handle.canvas_id)
    }

    pub fn render(&self, spec: &ChartSpec) -> RenderOutcome {
        let key = spec.key;
        let Some(canvas_id) = key
            .canvas_ids()
            .iter()
            .copied()
            .find(|id| self.renderer.canvas_exists(id))
        else {
            get_logger().debug(
                LogComponent::Application("Charts"),
                &format!("No canvas for chart '{}', skipping render", key),
            );
            return RenderOutcome::NoCanvas;
        };

        // Live -> Absent
        let previous = self.registry.borrow_mut().remove(&key);
        if let Some(handle) = previous {
            self.renderer.dispose(handle.instance);
        }

        // Absent -> Live
        match self.renderer.construct(canvas_id, spec) {
            Ok(instance) => {
                self.registry
                    .borrow_mut()
                    .insert(key, ChartHandle { key, canvas_id, instance });
                get_logger().debug(
                    LogComponent::Application("Charts"),
                    &format!("Chart '{}' rendered on #{} with {} points", key, canvas_id, spec.len()),
                );
                RenderOutcome::Rendered { canvas_id }
            }
            Err(e) => {
                get_logger().error(
                    LogComponent::Application("Charts"),
                    &format!("Chart '{}' could not be constructed: {}", key, e),
                );
                RenderOutcome::Failed
            }
        }
    }

    /// Dispose every live instance (page teardown).
    pub fn dispose_all(&self) {
        let handles: Vec<_> = self.registry.borrow_mut().drain().map(|(_, handle)| handle).collect();
        for handle in handles {
            self.renderer.dispose(handle.instance);
        }
    }
}
