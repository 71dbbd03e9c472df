use super::field_table::parse_field_table;
use super::header::{parse_header, Header};
use super::record_table::parse_record_table;
use crate::schema::Schema;
use humansize::{file_size_opts, FileSize};
use term_table::row::Row;
use term_table::table_cell::{Alignment, TableCell};
use term_table::Table;

fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

fn italic(s: &str) -> String {
    format!("\x1b[3m{s}\x1b[0m")
}

fn format_header(header: &Header) -> String {
    let mut table = Table::new();

    table.add_row(Row::new(vec![TableCell::new_with_alignment(
        bold("Header"),
        2,
        Alignment::Center,
    )]));
    table.add_row(Row::new(vec![
        TableCell::new("Field Count"),
        TableCell::new_with_alignment(format!("{}", header.field_count()), 1, Alignment::Right),
    ]));
    table.add_row(Row::new(vec![
        TableCell::new("Record Count"),
        TableCell::new_with_alignment(format!("{}", header.record_count()), 1, Alignment::Right),
    ]));

    table.render()
}

fn format_field_table(schema: &Schema, record_count: u32) -> String {
    let mut table = Table::new();

    table.add_row(Row::new(vec![TableCell::new_with_alignment(
        bold("Field Table"),
        2,
        Alignment::Center,
    )]));

    for field in schema.fields() {
        table.add_row(Row::new(vec![
            TableCell::new(bold(field.name())),
            TableCell::new_with_alignment(
                format!("{} bytes", field.declared_length()),
                1,
                Alignment::Right,
            ),
        ]));
    }

    table.add_row(Row::new(vec![
        TableCell::new("Bytes / Record"),
        TableCell::new_with_alignment(
            format!("{}", schema.bytes_per_record()),
            1,
            Alignment::Right,
        ),
    ]));

    let table_size = schema
        .bytes_per_record()
        .saturating_mul(usize::try_from(record_count).unwrap_or(usize::MAX));
    table.add_row(Row::new(vec![
        TableCell::new("Record Table Size"),
        TableCell::new_with_alignment(
            format!(
                "{} ({})",
                table_size.file_size(file_size_opts::BINARY).unwrap(),
                italic(&table_size.to_string())
            ),
            1,
            Alignment::Right,
        ),
    ]));

    table.render()
}

fn try_format_records(input: &[u8], schema: &Schema, record_count: u32) -> String {
    let mut table = Table::new();

    match parse_record_table(input, schema, record_count) {
        Ok((_, records)) => {
            table.add_row(Row::new(vec![TableCell::new_with_alignment(
                bold("Records"),
                schema.fields().len() + 1,
                Alignment::Center,
            )]));

            table.add_row(Row::new(
                [TableCell::new_with_alignment("#", 1, Alignment::Center)]
                    .into_iter()
                    .chain(schema.fields().iter().map(|field| {
                        TableCell::new_with_alignment(field.name(), 1, Alignment::Center)
                    }))
                    .collect::<Vec<_>>(),
            ));

            for (i, record) in records.iter().enumerate() {
                table.add_row(Row::new(
                    [format!("{i}")]
                        .into_iter()
                        .chain(record.iter().map(|value| format!("{value}")))
                        .collect::<Vec<_>>(),
                ));
            }
        }
        Err(e) => {
            table.add_row(Row::new(vec![TableCell::new_with_alignment(
                format!("{e:?}"),
                1,
                Alignment::Left,
            )]));
        }
    }

    table.render()
}

pub fn inspect(input: &[u8]) -> Result<String, String> {
    let mut out = String::new();

    // Header
    let (input, header) =
        parse_header(input).map_err(|e| format!("Error Parsing Header: {e:?}"))?;
    out.push_str(&format_header(&header));
    out.push_str("\n\n");

    // Field Table
    let (input, schema) = parse_field_table(input, header.field_count())
        .map_err(|e| format!("Error Parsing Field Table: {e:?}"))?;
    out.push_str(&format_field_table(&schema, header.record_count()));
    out.push_str("\n\n");

    // Records
    out.push_str(&try_format_records(input, &schema, header.record_count()));

    Ok(out)
}
