//! Standalone SVG document for a chart frame.
//!
//! Shapes are written at their resting opacity, and each carries a
//! `<title>` with its tooltip text so viewers show the median on hover.

use std::fmt::Write;

use crate::config::ChartConfig;
use crate::frame::ChartFrame;
use crate::tooltip;

pub const CHART_TITLE: &str = "Daily Temperature Extremes by Season";
pub const Y_AXIS_TITLE: &str = "Temperature (°F)";
pub const X_AXIS_TITLE: &str = "Season";

/// Outer tick length of both axes, in pixels.
const TICK_SIZE: f64 = 6.0;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render `frame` as an SVG document string.
pub fn render_svg(frame: &ChartFrame, config: &ChartConfig) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_svg(&mut out, frame, config);
    out
}

fn write_svg(out: &mut String, frame: &ChartFrame, config: &ChartConfig) -> std::fmt::Result {
    let m = &config.margins;
    let (w, h) = (frame.plot_width, frame.plot_height);

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" font-family="sans-serif" font-size="10">"#,
        config.width, config.height
    )?;
    writeln!(
        out,
        r#"<text x="{}" y="{}" text-anchor="middle" font-size="16">{}</text>"#,
        config.width / 2.0,
        m.top / 2.0,
        escape(CHART_TITLE)
    )?;
    writeln!(out, r#"<g transform="translate({}, {})">"#, m.left, m.top)?;

    // Temperature axis
    writeln!(out, r#"<g class="y-axis" fill="none" text-anchor="end">"#)?;
    writeln!(
        out,
        r#"<path stroke="currentColor" d="M{t},{h}H0V0H{t}"/>"#,
        t = -TICK_SIZE,
        h = h
    )?;
    for tick in &frame.y_ticks {
        writeln!(
            out,
            r#"<g class="tick" transform="translate(0,{:.3})"><line stroke="currentColor" x2="{}"/><text fill="currentColor" x="{}" dy="0.32em">{}</text></g>"#,
            tick.offset,
            -TICK_SIZE,
            -(TICK_SIZE + 3.0),
            escape(&tick.label)
        )?;
    }
    writeln!(out, "</g>")?;

    // Season axis
    writeln!(
        out,
        r#"<g class="x-axis" fill="none" text-anchor="middle" transform="translate(0, {})">"#,
        h
    )?;
    writeln!(
        out,
        r#"<path stroke="currentColor" d="M0,{t}V0H{w}V{t}"/>"#,
        t = TICK_SIZE,
        w = w
    )?;
    for tick in &frame.x_ticks {
        writeln!(
            out,
            r#"<g class="tick" transform="translate({:.3},0)"><line stroke="currentColor" y2="{}"/><text fill="currentColor" y="{}" dy="0.71em">{}</text></g>"#,
            tick.offset,
            TICK_SIZE,
            TICK_SIZE + 3.0,
            tick.season
        )?;
    }
    writeln!(out, "</g>")?;

    // Axis titles
    writeln!(
        out,
        r#"<text transform="rotate(-90)" x="{}" y="{}" text-anchor="middle" font-size="12">{}</text>"#,
        -h / 2.0,
        -m.left / 2.0,
        escape(Y_AXIS_TITLE)
    )?;
    writeln!(
        out,
        r#"<text x="{}" y="{}" text-anchor="middle" font-size="12">{}</text>"#,
        w / 2.0,
        h + m.bottom * 0.75,
        escape(X_AXIS_TITLE)
    )?;

    for shape in &frame.shapes {
        let class = format!("violin{}", shape.key.series);
        writeln!(
            out,
            r#"<g class="{}" transform="translate({:.3}, 0)"><path d="{}" fill="{}" opacity="{}"><title>{}</title></path></g>"#,
            class,
            shape.x,
            shape.path,
            escape(&shape.fill),
            config.shape_opacity,
            escape(&format!(
                "{} {}",
                shape.key.season,
                tooltip::tooltip_text(shape.key.series, shape.median)
            ))
        )?;
    }

    writeln!(out, "</g>")?;
    writeln!(out, "</svg>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::build_frame;
    use wxv_weather::{load_csv, Season, SeasonFilter};

    #[test]
    fn test_document_structure() {
        let data = load_csv("date,TMAX,TMIN\n20230115,40,20\n20230716,95,70\n").unwrap();
        let config = ChartConfig::default();
        let frame = build_frame(&data, SeasonFilter::All, &config).unwrap();
        let svg = render_svg(&frame, &config);

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"width="800" height="600""#));
        assert_eq!(svg.matches(r#"class="violinTMAX""#).count(), 2);
        assert_eq!(svg.matches(r#"class="violinTMIN""#).count(), 2);
        assert!(svg.contains("Winter Maximum Temperature Median: 40.00°F"));
        assert!(svg.contains("Summer Minimum Temperature Median: 70.00°F"));
        for season in Season::ALL {
            assert!(svg.contains(&format!(">{}</text>", season)));
        }
        assert!(svg.contains(Y_AXIS_TITLE));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
