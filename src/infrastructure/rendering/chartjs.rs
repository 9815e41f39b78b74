use gloo::utils::format::JsValueSerdeExt;
use js_sys::{Object, Reflect};
use serde_json::{Value, json};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::HtmlCanvasElement;

use crate::domain::{
    chart::{AxisLayout, ChartKind, ChartRenderer, ChartSpec, LegendPolicy, palette},
    errors::{UiError, UiResult},
    formatting::format_currency,
    logging::{LogComponent, get_logger},
};

#[wasm_bindgen]
extern "C" {
    /// The global `Chart` constructor provided by Chart.js.
    #[wasm_bindgen(js_name = Chart)]
    pub type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &JsChart);
}

const FONT_FAMILY: &str = "Inter";

fn legend_json(legend: LegendPolicy) -> Value {
    match legend {
        LegendPolicy::Hidden => json!({ "display": false }),
        LegendPolicy::Bottom { font_size, padding } => {
            let mut font = json!({ "family": FONT_FAMILY });
            if let Some(size) = font_size {
                font["size"] = json!(size);
            }
            json!({
                "position": "bottom",
                "labels": { "color": palette::LEGEND_TEXT, "font": font, "padding": padding }
            })
        }
    }
}

fn dataset_json(spec: &ChartSpec) -> Value {
    let config = &spec.config;
    let mut dataset = match config.kind {
        ChartKind::Line => {
            let stroke = config.palette.first().copied().unwrap_or(palette::PRIMARY);
            json!({
                "data": spec.values,
                "borderColor": stroke,
                "backgroundColor": config.fill.unwrap_or(stroke),
                "fill": config.fill.is_some(),
                "tension": 0.4,
                "pointRadius": 4,
                "pointHoverRadius": 6,
                "pointBackgroundColor": stroke,
                "pointBorderColor": "#fff",
                "pointBorderWidth": 2
            })
        }
        ChartKind::Bar => json!({
            "data": spec.values,
            "backgroundColor": spec.colors(),
            "borderRadius": 8,
            "borderSkipped": false
        }),
        ChartKind::Doughnut => json!({
            "data": spec.values,
            "backgroundColor": spec.colors(),
            "borderWidth": 0,
            "hoverOffset": 10
        }),
    };
    if let Some(label) = config.dataset_label {
        dataset["label"] = json!(label);
    }
    if let Some(percentage) = config.bar_percentage {
        dataset["barPercentage"] = json!(percentage);
    }
    dataset
}

fn scales_json(spec: &ChartSpec) -> Option<Value> {
    let config = &spec.config;
    if config.axis == AxisLayout::None {
        return None;
    }
    let mut x = json!({
        "ticks": { "color": palette::TICK_TEXT },
        "grid": { "color": palette::GRID }
    });
    if config.rotate_labels {
        x["ticks"]["maxRotation"] = json!(45);
        x["ticks"]["minRotation"] = json!(45);
        x["grid"] = json!({ "display": false });
    }
    let y = json!({
        "ticks": { "color": palette::TICK_TEXT },
        "grid": { "color": palette::GRID },
        "beginAtZero": config.begin_at_zero
    });
    Some(json!({ "x": x, "y": y }))
}

/// Chart.js configuration without the callback functions, which are attached
/// separately as JS closures.
pub fn chart_config_json(spec: &ChartSpec) -> Value {
    let config = &spec.config;
    let mut options = json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": { "legend": legend_json(config.legend), "tooltip": {} }
    });
    if let Some(scales) = scales_json(spec) {
        options["scales"] = scales;
    }
    if config.axis == AxisLayout::Horizontal {
        options["indexAxis"] = json!("y");
    }
    if let Some(cutout) = config.cutout {
        options["cutout"] = json!(cutout);
    }

    json!({
        "type": config.kind.as_ref(),
        "data": { "labels": spec.labels, "datasets": [dataset_json(spec)] },
        "options": options
    })
}

/// Set `value` at `path` below `root`, creating intermediate objects.
fn set_path(root: &JsValue, path: &[&str], value: &JsValue) -> UiResult<()> {
    let reflect_err = |e: JsValue| UiError::BrowserApi(format!("{:?}", e));
    let Some((last, parents)) = path.split_last() else {
        return Ok(());
    };
    let mut node = root.clone();
    for key in parents {
        let key_js = JsValue::from_str(key);
        let mut child = Reflect::get(&node, &key_js).map_err(reflect_err)?;
        if child.is_undefined() || child.is_null() {
            child = Object::new().into();
            Reflect::set(&node, &key_js, &child).map_err(reflect_err)?;
        }
        node = child;
    }
    Reflect::set(&node, &JsValue::from_str(last), value).map_err(reflect_err)?;
    Ok(())
}

/// A live Chart.js widget plus the callbacks it references. The callbacks
/// must outlive the widget, so they are dropped only after `destroy`.
pub struct ChartJsInstance {
    chart: JsChart,
    _tooltip_label: Closure<dyn Fn(JsValue) -> String>,
    _tick_label: Option<Closure<dyn Fn(JsValue) -> String>>,
}

/// [`ChartRenderer`] over the page's Chart.js global.
#[derive(Default)]
pub struct ChartJsRenderer;

impl ChartJsRenderer {
    pub fn new() -> Self {
        Self
    }

    fn canvas(canvas_id: &str) -> Option<HtmlCanvasElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(canvas_id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()
    }
}

impl ChartRenderer for ChartJsRenderer {
    type Instance = ChartJsInstance;

    fn canvas_exists(&self, canvas_id: &str) -> bool {
        Self::canvas(canvas_id).is_some()
    }

    fn construct(&self, canvas_id: &str, spec: &ChartSpec) -> UiResult<ChartJsInstance> {
        let canvas = Self::canvas(canvas_id)
            .ok_or_else(|| UiError::ElementNotFound(canvas_id.to_string()))?;

        let config = JsValue::from_serde(&chart_config_json(spec))
            .map_err(|e| UiError::ChartConstruction(e.to_string()))?;

        // Tooltip text is precomputed per data point.
        let tooltips = spec.tooltips.clone();
        let tooltip_label = Closure::<dyn Fn(JsValue) -> String>::new(move |ctx: JsValue| {
            Reflect::get(&ctx, &JsValue::from_str("dataIndex"))
                .ok()
                .and_then(|index| index.as_f64())
                .and_then(|index| tooltips.get(index as usize).cloned())
                .unwrap_or_default()
        });
        set_path(
            &config,
            &["options", "plugins", "tooltip", "callbacks", "label"],
            tooltip_label.as_ref(),
        )?;

        let tick_label = if spec.config.currency_ticks {
            let closure = Closure::<dyn Fn(JsValue) -> String>::new(|value: JsValue| format_currency(value.as_f64()));
            set_path(&config, &["options", "scales", "y", "ticks", "callback"], closure.as_ref())?;
            Some(closure)
        } else {
            None
        };

        let chart = JsChart::new(&canvas, &config)
            .map_err(|e| UiError::ChartConstruction(format!("{:?}", e)))?;

        get_logger().debug(
            LogComponent::Infrastructure("ChartJs"),
            &format!("Constructed {} chart on #{}", spec.config.kind, canvas_id),
        );

        Ok(ChartJsInstance { chart, _tooltip_label: tooltip_label, _tick_label: tick_label })
    }

    fn dispose(&self, instance: ChartJsInstance) {
        instance.chart.destroy();
    }
}
