//! text, CSV and JSON renderings of parameters, breakdowns and comparisons.
use super::{DefaultsFormat, OutputFormat, TcoAppError};
use crate::comparison::{Comparison, RowHighlight};
use bustco_core::{
    model::parameters::{field_spec, FieldSpec},
    CostBreakdown, ParameterSet, Variant, VariantProfile,
};
use itertools::Itertools;
use serde::{ser::SerializeMap, Serialize};

const CURRENCY: &str = "€";

/// ordered (key, value) pairs serialized as a map, keeping their order.
struct OrderedMap<'a>(&'a [(&'static str, f64)]);

impl Serialize for OrderedMap<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// the parameter set as a flat key -> value document in form order.
pub fn render_parameters(
    params: &ParameterSet,
    format: DefaultsFormat,
) -> Result<String, TcoAppError> {
    let flat = params.to_flat()?;
    let doc = OrderedMap(&flat);
    match format {
        DefaultsFormat::Json => Ok(serde_json::to_string_pretty(&doc)?),
        DefaultsFormat::Toml => Ok(toml::to_string(&doc)?),
    }
}

/// the parameter schema, optionally restricted to the fields of one variant.
pub fn render_schema(variant: Option<Variant>) -> String {
    let header = ["key", "label", "group", "step", "min", "max", "decimals", "variants"];
    let rows = field_spec::PARAMETER_FIELDS
        .iter()
        .filter(|f| variant.map(|v| f.applies(v)).unwrap_or(true))
        .map(schema_row)
        .collect_vec();
    text_table(&header, &rows)
}

fn schema_row(spec: &FieldSpec) -> Vec<String> {
    let bound = |b: Option<f64>| b.map(|v| v.to_string()).unwrap_or_else(|| String::from("-"));
    vec![
        spec.key.to_string(),
        spec.label.to_string(),
        spec.group.to_string(),
        spec.step.to_string(),
        bound(spec.min),
        bound(spec.max),
        spec.decimals().to_string(),
        spec.applies_to.iter().map(|v| v.as_str()).join(","),
    ]
}

/// a single variant's breakdown.
pub fn render_breakdown(
    profile: &VariantProfile,
    breakdown: &CostBreakdown,
    format: OutputFormat,
) -> Result<String, TcoAppError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(breakdown)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(vec![]);
            writer.write_record(["category", "label", "cost"])?;
            for (category, value) in breakdown.iter() {
                writer.serialize((category.key(), category.label(), value))?;
            }
            writer.serialize(("total", "Total Cost per Cycle", breakdown.total()))?;
            csv_into_string(writer)
        }
        OutputFormat::Table => {
            let vehicle = &profile.vehicle;
            let title = format!(
                "{} TCO per cycle ({}, {} seats + {} standing = {} passengers)\n{}",
                profile.variant.display_name(),
                vehicle.model,
                vehicle.seats,
                vehicle.standing,
                vehicle.capacity(),
                vehicle.summary
            );
            let rows = breakdown
                .iter()
                .map(|(c, v)| vec![c.label().to_string(), money(v)])
                .chain(std::iter::once(vec![
                    String::from("Total Cost per Cycle"),
                    money(breakdown.total()),
                ]))
                .collect_vec();
            Ok(format!("{title}\n\n{}", text_table(&["Cost", "Value"], &rows)))
        }
    }
}

/// the comparison table followed by the composition series.
pub fn render_comparison(
    comparison: &Comparison,
    format: OutputFormat,
) -> Result<String, TcoAppError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(comparison)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(vec![]);
            writer.write_record([
                "group",
                "category",
                "label",
                "ice",
                "bev",
                "bev_ad",
                "highlight",
            ])?;
            for group in comparison.groups.iter() {
                for row in group.rows.iter() {
                    writer.serialize((
                        group.label,
                        row.category.key(),
                        row.label,
                        row.values.ice,
                        row.values.bev,
                        row.values.bev_ad,
                        highlight_text(&row.highlight),
                    ))?;
                }
            }
            let total = &comparison.total;
            writer.serialize((
                "",
                "total",
                total.label,
                total.values.ice,
                total.values.bev,
                total.values.bev_ad,
                "",
            ))?;
            csv_into_string(writer)
        }
        OutputFormat::Table => {
            let header = ["Cost Category", "ICE", "BEV", "BEV-AD", "Highlight"];
            let mut rows = vec![];
            for group in comparison.groups.iter() {
                rows.push(vec![format!("[{}]", group.label)]);
                for row in group.rows.iter() {
                    let mut cells = vec![format!("  {}", row.label)];
                    cells.extend(Variant::ALL.map(|v| money(row.values.get(v))));
                    cells.push(highlight_text(&row.highlight));
                    rows.push(cells);
                }
            }
            let total = &comparison.total;
            let mut cells = vec![total.label.to_string()];
            cells.extend(Variant::ALL.map(|v| money(total.values.get(v))));
            rows.push(cells);
            let mut out = text_table(&header, &rows);
            out.push_str("\nCost Composition\n");
            for series in comparison.series.iter() {
                if series.is_empty() {
                    out.push_str(&format!("  {}: no cost above zero\n", series.title));
                    continue;
                }
                let parts = series
                    .labels
                    .iter()
                    .zip(series.values.iter())
                    .map(|(label, value)| format!("{label}={value:.2}"))
                    .join(", ");
                out.push_str(&format!("  {}: {parts}\n", series.title));
            }
            Ok(out)
        }
    }
}

fn highlight_text(highlight: &RowHighlight) -> String {
    highlight.colors().iter().join("+")
}

fn money(value: f64) -> String {
    format!("{value:.2} {CURRENCY}")
}

fn csv_into_string(writer: csv::Writer<Vec<u8>>) -> Result<String, TcoAppError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| TcoAppError::InternalError(format!("failure flushing CSV: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| TcoAppError::InternalError(format!("CSV output is not UTF-8: {e}")))
}

/// left-aligned columns padded to the widest cell. rows shorter than the
/// header leave trailing columns empty.
fn text_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths = header.iter().map(|h| h.chars().count()).collect_vec();
    for row in rows.iter() {
        // single-cell rows are section titles and do not widen the first column
        if row.len() == 1 {
            continue;
        }
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{c:<width$}", width = widths.get(i).copied().unwrap_or(0)))
            .join("  ")
            .trim_end()
            .to_string()
    };
    let mut out = String::new();
    out.push_str(&line(header.to_vec()));
    out.push('\n');
    out.push_str(&widths.iter().map(|w| "-".repeat(*w)).join("  "));
    out.push('\n');
    for row in rows.iter() {
        out.push_str(&line(row.iter().map(|s| s.as_str()).collect()));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{render_breakdown, render_comparison, render_parameters, render_schema};
    use crate::{
        app::{DefaultsFormat, OutputFormat},
        comparison::ZeroPolicy,
        session::TcoSession,
    };
    use bustco_core::{ParameterSet, Variant, VariantProfile};

    fn full_session() -> TcoSession {
        let mut session = TcoSession::new();
        for variant in Variant::ALL {
            session.calculate(variant).expect("test invariant failed");
        }
        session
    }

    #[test]
    fn test_parameters_keep_form_order() {
        let params = ParameterSet::default_for(Variant::Ice);
        let json = render_parameters(&params, DefaultsFormat::Json).expect("test invariant failed");
        let first = json.find("one_way_distance_km").expect("test invariant failed");
        let last = json.find("general_admin_cost").expect("test invariant failed");
        assert!(first < last);

        let toml_doc =
            render_parameters(&params, DefaultsFormat::Toml).expect("test invariant failed");
        assert!(toml_doc.contains("fuel_consumption = 28.5"));
    }

    #[test]
    fn test_schema_filters_by_variant() {
        let all = render_schema(None);
        let bev = render_schema(Some(Variant::Bev));
        assert!(all.contains("fuel_price"));
        assert!(!bev.contains("fuel_price"));
        assert!(bev.contains("electricity_price"));
    }

    #[test]
    fn test_breakdown_table_shows_total() {
        let session = full_session();
        let breakdown = session
            .results()
            .get(Variant::Ice)
            .expect("test invariant failed");
        let profile = VariantProfile::new(Variant::Ice);
        let table = render_breakdown(&profile, breakdown, OutputFormat::Table)
            .expect("test invariant failed");
        assert!(table.contains("40.02 €"));
        assert!(table.contains("Citaro"));
        assert!(table.contains("99 passengers"));
        assert!(table.contains(&profile.vehicle.summary));
    }

    #[test]
    fn test_comparison_csv_has_one_line_per_row() {
        let session = full_session();
        let comparison = session
            .compare(ZeroPolicy::Keep)
            .expect("test invariant failed");
        let csv = render_comparison(&comparison, OutputFormat::Csv).expect("test invariant failed");
        let lines: Vec<&str> = csv.lines().collect();
        // header + 25 categories + total
        assert_eq!(lines.len(), 27);
        assert!(lines[0].starts_with("group,category"));
        assert!(lines[26].contains("total"));
    }

    #[test]
    fn test_comparison_table_lists_groups_and_series() {
        let session = full_session();
        let comparison = session
            .compare(ZeroPolicy::Exclude)
            .expect("test invariant failed");
        let table =
            render_comparison(&comparison, OutputFormat::Table).expect("test invariant failed");
        assert!(table.contains("[Autonomous Costs]"));
        assert!(table.contains("Total Cost per Cycle"));
        assert!(table.contains("BEV-AD: fuel="));
        // zero categories such as adblue and toll are left out
        assert!(table.contains("BEV-AD: fuel=5.62, tires=0.54, lubricant=0.02, leasing=13.71"));
    }
}
