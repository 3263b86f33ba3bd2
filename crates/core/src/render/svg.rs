use crate::{render::HistogramRenderer, Histogram, NumRange};
use svg::{
    node::{
        element::{Group, Line, Rectangle, Text, Title},
        Comment,
    },
    Document,
};

/// Render a histogram as an SVG document, with bars, axes, and labels.
pub fn histogram_to_svg(
    histogram: &Histogram,
    renderer: &HistogramRenderer,
) -> Document {
    let config = renderer.config();
    let area = renderer.plot_area();
    let axis_color = config.axis_color.to_html();

    let mut document = Document::new()
        .set("viewBox", (0u32, 0u32, config.width, config.height))
        .set("width", config.width)
        .set("height", config.height)
        .set("shape-rendering", "crispEdges")
        .add(Title::new().add(svg::node::Text::new(renderer.summary(histogram))))
        .add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", config.background_color.to_html()),
        );

    let mut bars = Group::new().set("fill", config.bar_color.to_html());
    for (bin, rect) in histogram.bins().zip(renderer.bar_rects(histogram)) {
        // Readability!
        bars = bars.add(Comment::new(format!(
            "[{}, {}): {}",
            bin.start, bin.end, bin.count
        )));
        if bin.count > 0 {
            bars = bars.add(
                Rectangle::new()
                    .set("x", rect.x)
                    .set("y", rect.y)
                    .set("width", rect.width)
                    .set("height", rect.height)
                    .set("stroke", config.background_color.to_html())
                    .set("stroke-width", 0.5),
            );
        }
    }
    document = document.add(bars);

    // Axes run along the bottom and left edges of the plot area
    let axes = Group::new()
        .set("stroke", axis_color.as_str())
        .set("stroke-width", 1)
        .add(line((area.x, area.bottom()), (area.right(), area.bottom())))
        .add(line((area.x, area.y), (area.x, area.bottom())));
    document = document.add(axes);

    let mut labels = Group::new()
        .set("fill", axis_color.as_str())
        .set("font-family", "sans-serif")
        .set("font-size", 12);

    // Value axis: label both ends of the observed range
    let range = histogram.range();
    let value_y = area.bottom() + 16.0;
    labels = labels
        .add(text(area.x, value_y, "start", format!("{:.2}", range.min)))
        .add(text(area.right(), value_y, "end", format!("{:.2}", range.max)))
        .add(text(
            area.x + area.width / 2.0,
            area.bottom() + 36.0,
            "middle",
            renderer.value_axis_label(),
        ));

    // Count axis: evenly spaced ticks from zero to the tallest bar
    let count_max = renderer.count_axis_max(histogram) as f64;
    let tick_range =
        NumRange::new(0.0, (HistogramRenderer::COUNT_TICKS - 1) as f64);
    let y_range = NumRange::new(area.bottom(), area.y);
    let mut ticks = Group::new()
        .set("stroke", axis_color.as_str())
        .set("stroke-width", 1);
    for i in 0..HistogramRenderer::COUNT_TICKS {
        let y = tick_range.map_to(&y_range, i as f64);
        let count = tick_range.map_to(&NumRange::new(0.0, count_max), i as f64);
        ticks = ticks.add(line((area.x - 4.0, y), (area.x, y)));
        labels = labels.add(text(
            area.x - 8.0,
            y + 4.0,
            "end",
            format!("{}", count.round()),
        ));
    }
    document = document.add(ticks);

    labels = labels.add(
        text(area.x + area.width / 2.0, area.y - 14.0, "middle", renderer.caption())
            .set("font-size", 16),
    );

    document.add(labels)
}

fn line(from: (f64, f64), to: (f64, f64)) -> Line {
    Line::new()
        .set("x1", from.0)
        .set("y1", from.1)
        .set("x2", to.0)
        .set("y2", to.1)
}

fn text(x: f64, y: f64, anchor: &str, content: String) -> Text {
    Text::new()
        .set("x", x)
        .set("y", y)
        .set("text-anchor", anchor)
        .add(svg::node::Text::new(content))
}
