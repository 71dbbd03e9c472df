use lvtlib::read::table::TableReader;

fn main() -> Result<(), String> {
    let filename = std::env::args()
        .nth(1)
        .ok_or_else(|| format!("usage: lvt2csv <filename>"))?;
    let data = std::fs::read(&filename).map_err(|e| format!("Error opening {filename}: {e:?}"))?;
    let table = TableReader::new(&data).map_err(|e| format!("Error decoding {filename}: {e}"))?;

    let schema = table.schema();
    let titles = schema
        .fields()
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>();
    let lengths = schema
        .fields()
        .iter()
        .map(|field| field.declared_length())
        .collect::<Vec<_>>();
    println!(
        "num_records={} bytes_per_record={}",
        table.record_count(),
        schema.bytes_per_record()
    );
    println!("field_titles={titles:?}");
    println!("field_lengths={lengths:?}");

    let mut csv = String::new();
    csv.push_str(&titles.join(", "));
    csv.push('\n');

    println!("{}", "-".repeat(40));
    for record in table.records() {
        let line = record
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!("{line}");
        csv.push_str(&line);
        csv.push('\n');
    }
    println!("{}", "-".repeat(40));

    let out_filename = format!("{filename}.csv");
    std::fs::write(&out_filename, csv)
        .map_err(|e| format!("Error writing {out_filename}: {e:?}"))?;

    Ok(())
}
