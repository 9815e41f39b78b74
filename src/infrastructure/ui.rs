//! DOM-backed display surface (separate from domain logic).

use web_sys::{Document, Element};

use crate::domain::{
    dashboard::{DisplaySurface, TableCell, TableRow},
    errors::{UiError, UiResult},
    logging::{LogComponent, get_logger},
};
use crate::log_debug;

const MUTED_STYLE: &str = "text-align: center; color: var(--text-muted);";

/// [`DisplaySurface`] over the live document. Targets are CSS selectors.
#[derive(Clone)]
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new() -> UiResult<Self> {
        let document = web_sys::window()
            .ok_or_else(|| UiError::BrowserApi("Window not available".to_string()))?
            .document()
            .ok_or_else(|| UiError::BrowserApi("Document not available".to_string()))?;
        Ok(Self { document })
    }

    pub fn from_document(document: Document) -> Self {
        Self { document }
    }

    fn find(&self, target: &str) -> Option<Element> {
        let element = self.document.query_selector(target).ok().flatten();
        if element.is_none() {
            log_debug!(
                LogComponent::Infrastructure("DomSurface"),
                "Target '{}' not found (optional)",
                target
            );
        }
        element
    }

    fn cell_element(&self, cell: &TableCell) -> UiResult<Element> {
        let td = self
            .document
            .create_element("td")
            .map_err(|e| UiError::BrowserApi(format!("{:?}", e)))?;
        td.set_text_content(Some(&cell.text));
        if cell.colspan > 1 {
            let _ = td.set_attribute("colspan", &cell.colspan.to_string());
        }
        if cell.muted {
            let _ = td.set_attribute("style", MUTED_STYLE);
        } else if let Some(tone) = cell.tone {
            let _ = td.set_attribute("style", &format!("color: {};", tone.color()));
        }
        Ok(td)
    }

    fn row_element(&self, row: &TableRow) -> UiResult<Element> {
        let tr = self
            .document
            .create_element("tr")
            .map_err(|e| UiError::BrowserApi(format!("{:?}", e)))?;
        for cell in &row.cells {
            let td = self.cell_element(cell)?;
            tr.append_child(&td)
                .map_err(|e| UiError::BrowserApi(format!("{:?}", e)))?;
        }
        Ok(tr)
    }
}

impl DisplaySurface for DomSurface {
    fn set_text(&self, target: &str, text: &str) {
        if let Some(element) = self.find(target) {
            element.set_text_content(Some(text));
        }
    }

    fn set_class(&self, target: &str, class: &str, enabled: bool) {
        if let Some(element) = self.find(target) {
            if let Err(e) = element.class_list().toggle_with_force(class, enabled) {
                get_logger().warn(
                    LogComponent::Infrastructure("DomSurface"),
                    &format!("Failed to toggle '{}' on '{}': {:?}", class, target, e),
                );
            }
        }
    }

    fn replace_rows(&self, table: &str, rows: &[TableRow]) {
        let Some(body) = self.find(table) else {
            return;
        };
        body.set_inner_html("");
        for row in rows {
            match self.row_element(row) {
                Ok(tr) => {
                    let _ = body.append_child(&tr);
                }
                Err(e) => get_logger().warn(
                    LogComponent::Infrastructure("DomSurface"),
                    &format!("Skipping row '{}': {}", row.summary(), e),
                ),
            }
        }
    }

    fn has_target(&self, target: &str) -> bool {
        self.document.query_selector(target).ok().flatten().is_some()
    }
}
