//! CSV export of series history.
//!
//! Series are aligned by timestep: row `i` holds the `i`-th sample of every
//! group, with an empty cell where a group has fewer samples.

use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::data::series::SeriesCollection;
use crate::error::Result;

pub fn write_history_csv<W: Write>(w: W, history: &SeriesCollection) -> Result<()> {
    let mut writer = Writer::from_writer(w);

    let mut header = vec!["timestep"];
    header.extend(history.groups().iter().map(String::as_str));
    writer.write_record(&header)?;

    for i in 0..history.max_len() {
        let mut row = vec![i.to_string()];
        row.extend(
            history
                .iter()
                .map(|(_, samples)| samples.get(i).map(f64::to_string).unwrap_or_default()),
        );
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_history_csv<P: AsRef<Path>>(path: P, history: &SeriesCollection) -> Result<()> {
    let f = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_history_csv(f, history)
}
