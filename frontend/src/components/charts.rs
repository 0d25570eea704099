use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::services::transforms::{CategoryComparison, CategorySlice};

const CURRENT_COLOR: RGBColor = RGBColor(136, 132, 216);
const PREDICTED_COLOR: RGBColor = RGBColor(130, 202, 157);

/// Slice colors follow the original dashboard's `hsl(index * 45, 70%, 60%)`
/// wheel.
fn slice_color(index: usize) -> RGBColor {
    hsl_to_rgb((index as f64 * 45.0) % 360.0, 0.7, 0.6)
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> RGBColor {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    RGBColor(
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}

#[derive(Properties, PartialEq)]
pub struct CategoryPieChartProps {
    pub data: Vec<CategorySlice>,
}

/// Spending-by-category pie chart rendered onto an HTML canvas.
pub struct CategoryPieChart {
    canvas_ref: NodeRef,
}

impl Component for CategoryPieChart {
    type Message = ();
    type Properties = CategoryPieChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().data != old_props.data {
            self.draw(&ctx.props().data);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().data.is_empty() {
            self.draw(&ctx.props().data);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="chart-container">
                <h3>{"Spending by Category"}</h3>
                {if ctx.props().data.is_empty() {
                    html! { <div class="chart-empty"><p>{"No spending data yet"}</p></div> }
                } else {
                    html! {
                        <canvas
                            ref={self.canvas_ref.clone()}
                            width="400"
                            height="300"
                        ></canvas>
                    }
                }}
            </div>
        }
    }
}

impl CategoryPieChart {
    fn draw(&self, data: &[CategorySlice]) {
        if data.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(400);
        canvas.set_height(300);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let sizes: Vec<f64> = data.iter().map(|slice| slice.amount).collect();
        let colors: Vec<RGBColor> = (0..data.len()).map(slice_color).collect();
        let labels: Vec<String> = data.iter().map(|slice| slice.category.clone()).collect();

        let center = (200, 150);
        let radius = 100.0;
        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.label_style(("sans-serif", 14).into_font().color(&BLACK));
        pie.percentages(("sans-serif", 12).into_font().color(&BLACK));

        let _ = root.draw(&pie);
    }
}

#[derive(Properties, PartialEq)]
pub struct ComparisonBarChartProps {
    pub data: Vec<CategoryComparison>,
}

/// Current-vs-predicted grouped bar chart, one group per predicted
/// category.
pub struct ComparisonBarChart {
    canvas_ref: NodeRef,
}

impl Component for ComparisonBarChart {
    type Message = ();
    type Properties = ComparisonBarChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().data != old_props.data {
            self.draw(&ctx.props().data);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().data.is_empty() {
            self.draw(&ctx.props().data);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="chart-container">
                <h3>{"Current vs Predicted Spending"}</h3>
                {if ctx.props().data.is_empty() {
                    html! { <div class="chart-empty"><p>{"No predictions yet"}</p></div> }
                } else {
                    html! {
                        <canvas
                            ref={self.canvas_ref.clone()}
                            width="500"
                            height="300"
                        ></canvas>
                    }
                }}
            </div>
        }
    }
}

impl ComparisonBarChart {
    fn draw(&self, data: &[CategoryComparison]) {
        if data.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(500);
        canvas.set_height(300);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let max_value = data
            .iter()
            .map(|row| row.predicted.max(row.current))
            .fold(0.0_f64, f64::max)
            .max(1.0);

        let categories: Vec<String> = data.iter().map(|row| row.category.clone()).collect();
        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(60)
            .build_cartesian_2d(0.0..data.len() as f64, 0.0..max_value * 1.1)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("Amount ($)")
            .y_label_formatter(&|v| format!("${:.0}", v))
            .x_labels(categories.len())
            .x_label_formatter(&|x| {
                categories
                    .get(*x as usize)
                    .cloned()
                    .unwrap_or_default()
            })
            .label_style(("sans-serif", 12))
            .draw()
            .is_err()
        {
            return;
        }

        let current_bars = chart.draw_series(data.iter().enumerate().map(|(i, row)| {
            let x = i as f64;
            Rectangle::new(
                [(x + 0.15, 0.0), (x + 0.45, row.current)],
                CURRENT_COLOR.filled(),
            )
        }));
        if let Ok(series) = current_bars {
            series.label("Current").legend(|(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], CURRENT_COLOR.filled())
            });
        }

        let predicted_bars = chart.draw_series(data.iter().enumerate().map(|(i, row)| {
            let x = i as f64;
            Rectangle::new(
                [(x + 0.55, 0.0), (x + 0.85, row.predicted)],
                PREDICTED_COLOR.filled(),
            )
        }));
        if let Ok(series) = predicted_bars {
            series.label("Predicted").legend(|(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], PREDICTED_COLOR.filled())
            });
        }

        let _ = chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_colors_cycle_the_hue_wheel() {
        // Eight slices before the 45-degree steps wrap around.
        assert_eq!(slice_color(0), slice_color(8));
        assert_ne!(slice_color(0), slice_color(1));
    }

    #[test]
    fn test_hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), RGBColor(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), RGBColor(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), RGBColor(0, 0, 255));
    }
}
