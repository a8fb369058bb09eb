use cipherforge::optimizer::StageReport;
use cipherforge::scorer::ScoreDetails;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Plaintext alphabet on top, the ciphertext letter beneath each one.
pub fn print_key_table(plain: &str, cipher: &str) {
    println!("\nKey:");
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for (label, row) in [("Plain", plain), ("Cipher", cipher)] {
        let mut cells = vec![Cell::new(label).add_attribute(Attribute::Bold)];
        cells.extend(
            row.chars()
                .map(|c| Cell::new(c.to_string()).set_alignment(CellAlignment::Center)),
        );
        table.add_row(cells);
    }
    println!("{}", table);
    println!("{}\n{}", plain, cipher);
}

pub fn print_stage_report(stages: &[StageReport]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Stage").add_attribute(Attribute::Bold),
        Cell::new("Best").fg(Color::Cyan),
        Cell::new("Evals"),
        Cell::new("Improved"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for r in stages {
        let improved = if r.improved {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("-")
        };
        table.add_row(vec![
            Cell::new(r.stage.to_string()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", r.score)).fg(Color::Cyan),
            Cell::new(r.evaluations.to_string()),
            improved,
        ]);
    }
    println!("\n{}", table);
}

pub fn print_score_breakdown(results: &[(String, ScoreDetails)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Text").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Dict"),
        Cell::new("Phrase"),
        Cell::new("Len"),
        Cell::new("Di"),
        Cell::new("Tri"),
        Cell::new("Freq"),
        Cell::new("Pen").fg(Color::Red),
        Cell::new("Words"),
        Cell::new("Hits").fg(Color::Green),
    ]);

    for i in 1..=10 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, d) in results {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.0}", d.total)).fg(Color::Cyan),
            Cell::new(format!("{:.0}", d.dictionary)),
            Cell::new(format!("{:.0}", d.phrase_bonus)),
            Cell::new(format!("{:.0}", d.word_length)),
            Cell::new(format!("{:.0}", d.digram)),
            Cell::new(format!("{:.0}", d.trigram)),
            Cell::new(format!("{:.1}", d.frequency)),
            Cell::new(format!("-{:.0}", d.penalty)).fg(Color::Red),
            Cell::new(d.word_count.to_string()),
            Cell::new(d.dictionary_hits.to_string()).fg(Color::Green),
        ]);
    }
    println!("\n{}", table);
}
