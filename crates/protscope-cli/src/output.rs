use crate::cli::OutputFormat;
use crate::error::Result;
use protscope::core::alignment::AlignmentSet;
use protscope::core::models::record::RecordSummary;
use protscope::core::protparam::AnalysisResult;
use std::io::Write;

pub fn write_analysis(
    out: &mut impl Write,
    result: &AnalysisResult,
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, result)?;
        writeln!(out)?;
        return Ok(());
    }

    let mass_kind = if result.monoisotopic {
        "monoisotopic"
    } else {
        "average"
    };
    let ss = &result.secondary_structure;
    let ext = &result.extinction_coefficient;

    writeln!(out, "Length:               {}", result.length)?;
    writeln!(
        out,
        "Molecular weight:     {:.4} Da ({})",
        result.molecular_weight, mass_kind
    )?;
    writeln!(out, "Aromaticity:          {:.4}", result.aromaticity)?;
    writeln!(out, "Instability index:    {:.4}", result.instability_index)?;
    writeln!(out, "Isoelectric point:    {:.4}", result.isoelectric_point)?;
    writeln!(out, "GRAVY:                {:.4}", result.gravy)?;
    writeln!(
        out,
        "Secondary structure:  helix {:.4}, turn {:.4}, sheet {:.4}",
        ss.helix, ss.turn, ss.sheet
    )?;
    writeln!(
        out,
        "Extinction coeff.:    {} (reduced), {} (cystines)",
        ext.reduced, ext.oxidized
    )?;
    writeln!(out, "Amino acid counts:")?;
    for (residue, count) in &result.amino_acid_counts {
        writeln!(out, "  {}  {:>5}", residue, count)?;
    }
    Ok(())
}

pub fn write_alignment(
    out: &mut impl Write,
    set: &AlignmentSet,
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, set)?;
        writeln!(out)?;
        return Ok(());
    }

    let best = set.best();
    writeln!(out, "Score: {}", set.score())?;
    writeln!(
        out,
        "Identity: {}/{} ({:.1}%)",
        best.matches(),
        best.len(),
        best.identity() * 100.0
    )?;
    let suffix = if set.is_truncated() { "+" } else { "" };
    writeln!(
        out,
        "Optimal alignments: {}{} (showing the first in lexicographic order)",
        set.len(),
        suffix
    )?;
    writeln!(out)?;
    writeln!(out, "{}", best)?;
    Ok(())
}

pub fn write_summary(out: &mut impl Write, summary: &RecordSummary) -> Result<()> {
    let fields = [
        ("Entry", summary.entry_name.clone()),
        ("Accessions", Some(summary.accessions.join(", ")).filter(|s| !s.is_empty())),
        ("Protein", summary.protein_name.clone()),
        ("Gene", summary.gene_name.clone()),
        ("Organism", summary.organism.clone()),
        ("Length", summary.declared_length.map(|n| format!("{} aa", n))),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            writeln!(out, "{:<12}{}", format!("{}:", label), value)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use protscope::core::alignment::{Scoring, align_global};
    use protscope::core::protparam::analyze_sequence;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn analysis_text_lists_every_statistic() {
        let result = analyze_sequence("MEEPQSDPSV").unwrap();
        let text = render(|out| write_analysis(out, &result, OutputFormat::Text));

        for label in [
            "Molecular weight:",
            "Aromaticity:",
            "Instability index:",
            "Isoelectric point:",
            "GRAVY:",
            "Secondary structure:",
            "Extinction coeff.:",
        ] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(text.contains("(average)"));
        assert!(text.contains("  E      2"));
    }

    #[test]
    fn analysis_json_is_machine_readable() {
        let result = analyze_sequence("GAV").unwrap();
        let text = render(|out| write_analysis(out, &result, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["length"], 3);
        assert_eq!(value["sequence"], "GAV");
    }

    #[test]
    fn alignment_text_shows_score_and_gapped_sequences() {
        let set = align_global("MEEPQSDPSV", "MEEPQSDLSV", &Scoring::default(), 100).unwrap();
        let text = render(|out| write_alignment(out, &set, OutputFormat::Text));
        assert!(text.starts_with("Score: 9\n"));
        assert!(text.contains("Optimal alignments: 3 "));
        assert!(text.contains("MEEPQSD-PSV"));
        assert!(text.contains("MEEPQSDL-SV"));
    }

    #[test]
    fn truncated_alignment_count_is_marked() {
        let set = align_global("AAAA", "CCCC", &Scoring::default(), 2).unwrap();
        assert!(set.is_truncated());
        let text = render(|out| write_alignment(out, &set, OutputFormat::Text));
        assert!(text.contains("Optimal alignments: 2+ "));
    }

    #[test]
    fn summary_skips_missing_fields() {
        let summary = RecordSummary {
            entry_name: Some("P53_HUMAN".to_string()),
            gene_name: Some("TP53".to_string()),
            ..Default::default()
        };
        let text = render(|out| write_summary(out, &summary));
        assert_eq!(text, "Entry:      P53_HUMAN\nGene:       TP53\n");
    }
}
