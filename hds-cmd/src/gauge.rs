//! Offline gauge banding and standalone SVG rendering.

use hds_core::gauge::{band_thresholds, GaugeBands, GaugeThresholds};
use hds_core::geometry::GaugeGeometry;
use hds_core::units::{Fraction, Percentage};
use log::info;

fn to_percentage(value: f64, fractions: bool) -> Percentage {
    if fractions {
        Fraction(value).into()
    } else {
        Percentage(value)
    }
}

/// Render a self-contained SVG document of the gauge.
pub fn render_svg(gauge: &GaugeBands, geometry: &GaugeGeometry) -> String {
    let mut svg = String::from(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="240" height="140" viewBox="0 20 200 120">"#,
    );
    svg.push('\n');
    for arc in geometry.arcs(gauge) {
        if arc.path.is_empty() {
            continue;
        }
        svg.push_str(&format!(
            r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            arc.path, arc.color, geometry.stroke_width
        ));
        svg.push('\n');
    }
    svg.push_str(&format!(
        r#"  <g transform="rotate({} {} {})">"#,
        geometry.needle_angle(gauge),
        geometry.cx,
        geometry.cy
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r##"    <line x1="{cx}" y1="{cy}" x2="{x2}" y2="{cy}" stroke="#334155" stroke-width="4" stroke-linecap="round"/>"##,
        cx = geometry.cx,
        cy = geometry.cy,
        x2 = geometry.cx + geometry.radius - 5.0
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r##"    <circle cx="{}" cy="{}" r="6" fill="#334155"/>"##,
        geometry.cx, geometry.cy
    ));
    svg.push_str("\n  </g>\n");
    svg.push_str(&format!(
        r##"  <text x="100" y="128" text-anchor="middle" font-size="14" font-weight="bold" fill="#1e293b">{:.1}%</text>"##,
        gauge.needle
    ));
    svg.push_str("\n</svg>\n");
    svg
}

pub fn run_gauge(
    metas: [f64; 3],
    fractions: bool,
    current: f64,
    svg_path: Option<&str>,
) -> anyhow::Result<()> {
    let [meta1, meta2, meta3] = metas.map(|m| to_percentage(m, fractions));
    let thresholds = GaugeThresholds {
        meta1,
        meta2,
        meta3,
    };
    let gauge = band_thresholds(Some(&thresholds), current);

    let [b1, b2, b3] = gauge.boundaries;
    println!("Boundaries: {:.1}% / {:.1}% / {:.1}%", b1, b2, b3);
    for band in gauge.bands.iter() {
        println!(
            "  {:<10} {:>5.1}% - {:>5.1}%  {}",
            band.severity.label(),
            band.start,
            band.end,
            band.severity.color()
        );
    }
    println!(
        "Needle: {:.1}% ({})",
        gauge.needle,
        gauge.needle_severity().label()
    );

    if let Some(path) = svg_path {
        let svg = render_svg(&gauge, &GaugeGeometry::default());
        std::fs::write(path, svg)?;
        info!("Gauge SVG written to {}", path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_flag_scales_targets() {
        assert_eq!(to_percentage(0.25, true), Percentage(25.0));
        assert_eq!(to_percentage(25.0, false), Percentage(25.0));
    }

    #[test]
    fn test_render_svg_has_one_path_per_visible_band() {
        let gauge = band_thresholds(Some(&GaugeThresholds::new(20.0, 40.0, 60.0)), 50.0);
        let svg = render_svg(&gauge, &GaugeGeometry::default());
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<path").count(), 4);
        assert!(svg.contains("rotate(270 100 100)"));
        assert!(svg.contains("50.0%"));
        // the critical band is painted last
        let red = svg.find("#ef4444").unwrap();
        let green = svg.find("#22c55e").unwrap();
        assert!(green < red);
    }

    #[test]
    fn test_render_svg_skips_zero_width_bands() {
        let gauge = band_thresholds(Some(&GaugeThresholds::new(0.0, 50.0, 50.0)), 10.0);
        let svg = render_svg(&gauge, &GaugeGeometry::default());
        assert_eq!(svg.matches("<path").count(), 2);
    }
}
