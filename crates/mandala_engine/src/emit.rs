//! Canonical golden-file serialization.
//!
//! The layout is fixed: two-space indentation, fixed key order, fixed
//! numeric precision, and no trailing newline. Downstream comparisons are
//! byte-for-byte, so this is written by hand rather than through a JSON
//! pretty-printer.

use mandala_chart::{ACTIVATION_ORDER, ActivationSet, ZodiacPosition};

use crate::pipeline::ChartReport;

/// JSON string literal with escaping.
fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

fn flag(b: bool) -> &'static str {
    if b { "\"true\"" } else { "\"false\"" }
}

fn position_line(key: &str, p: ZodiacPosition) -> String {
    format!(
        "        {}: {{ \"sign\": {}, \"deg\": {}, \"min\": {} }}",
        quote(key),
        quote(p.sign.name()),
        p.deg,
        p.min
    )
}

fn activation_lines(set: &ActivationSet) -> String {
    set.iter()
        .map(|(body, gl)| format!("        {}: {}", quote(body.name()), quote(gl)))
        .collect::<Vec<_>>()
        .join(",\n")
}

/// A JSON object body whose closing brace sits at `indent` spaces.
fn object(indent: usize, fields: &[(&str, String)]) -> String {
    let pad = " ".repeat(indent);
    let body = fields
        .iter()
        .map(|(key, value)| format!("{pad}  {}: {value}", quote(key)))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{{\n{body}\n{pad}}}")
}

fn birth_section(report: &ChartReport) -> String {
    let b = &report.contract.case.birth;
    let body = object(
        2,
        &[
            ("date", quote(&b.date)),
            ("time_hh_mm", quote(&b.time_hh_mm)),
            ("seconds_policy", quote(&b.seconds_policy)),
            ("place_name", quote(&b.place_name)),
            ("latitude", format!("{:.4}", b.latitude)),
            ("longitude", format!("{:.4}", b.longitude)),
            ("timezone_iana", quote(&b.timezone_iana)),
        ],
    );
    format!("  \"birth\": {body}")
}

fn contract_section(report: &ChartReport) -> String {
    let ec = &report.contract.case.engine_contract;
    let nodes = &ec.node_policy_by_system;
    let hd = &ec.human_design_mapping;
    let solver = &ec.design_time_solver;

    let node_policy = object(
        4,
        &[
            ("astrology", quote(&nodes.astrology)),
            ("human_design", flag(nodes.human_design).to_owned()),
            ("gene_keys", flag(nodes.gene_keys).to_owned()),
        ],
    );
    let mapping = object(
        4,
        &[
            ("mandala_start_deg", format!("{:.2}", hd.mandala_start_deg)),
            ("gate_width_deg", format!("{:.3}", hd.gate_width_deg)),
            ("line_width_deg", format!("{:.4}", hd.line_width_deg)),
            ("interval_rule", quote(&hd.interval_rule)),
        ],
    );
    let stopping = object(
        4,
        &[
            ("sun_offset_deg", format!("{:.1}", solver.sun_offset_deg)),
            (
                "stop_if_abs_sun_diff_deg_below",
                format!("{:.4}", solver.stop_if_abs_sun_diff_deg_below),
            ),
            (
                "stop_if_time_bracket_below_seconds",
                solver.stop_if_time_bracket_below_seconds.to_string(),
            ),
        ],
    );
    let body = object(
        2,
        &[
            ("ephemeris", quote(&ec.ephemeris)),
            ("zodiac", quote(&ec.zodiac)),
            ("houses", quote(&ec.houses)),
            ("node_policy_by_system", node_policy),
            ("human_design_mapping", mapping),
            ("design_time_solver", stopping),
        ],
    );
    format!("  \"engine_contract\": {body}")
}

fn astrology_section(report: &ChartReport) -> String {
    let chart = &report.astrology;
    let mut lines: Vec<String> = chart
        .positions()
        .map(|(body, p)| position_line(body.name(), p))
        .collect();
    lines.push(position_line("ascendant", chart.ascendant));
    lines.push(position_line("mc", chart.mc));

    format!(
        "    \"astrology\": {{\n      \"positions\": {{\n{}\n      }}\n    }}",
        lines.join(",\n")
    )
}

fn human_design_section(report: &ChartReport) -> String {
    let hd = &report.human_design;
    let order = ACTIVATION_ORDER
        .iter()
        .map(|b| format!("        {}", quote(b.name())))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "    \"human_design\": {{\n      \"activation_object_order\": [\n{order}\n      ],\n      \
         \"personality\": {{\n{}\n      }},\n      \"design\": {{\n{}\n      }}\n    }}",
        activation_lines(&hd.personality),
        activation_lines(&hd.design)
    )
}

fn gene_keys_section(report: &ChartReport) -> String {
    let entries = report
        .gene_keys
        .entries()
        .iter()
        .map(|(name, k)| {
            format!(
                "        {}: {{ \"key\": {}, \"line\": {} }}",
                quote(name),
                k.key,
                k.line
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!("    \"gene_keys\": {{\n      \"activation_sequence\": {{\n{entries}\n      }}\n    }}")
}

/// Render a report as the canonical golden document.
///
/// `case_id` is written only when the input carried one.
pub fn emit_golden(report: &ChartReport) -> String {
    let mut sections = Vec::with_capacity(4);
    if let Some(id) = &report.contract.case.case_id {
        sections.push(format!("  \"case_id\": {}", quote(id)));
    }
    sections.push(birth_section(report));
    sections.push(contract_section(report));

    let expected = [
        astrology_section(report),
        human_design_section(report),
        gene_keys_section(report),
    ]
    .join(",\n");
    sections.push(format!("  \"expected\": {{\n{expected}\n  }}"));

    format!("{{\n{}\n}}", sections.join(",\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_layout() {
        let inner = object(4, &[("a", "1".into())]);
        let outer = object(2, &[("x", quote("y")), ("inner", inner)]);
        assert_eq!(
            outer,
            "{\n    \"x\": \"y\",\n    \"inner\": {\n      \"a\": 1\n    }\n  }"
        );
    }
}
