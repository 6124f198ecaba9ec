use crate::models::Record;
use crate::parsing::RecordReader;
use conel_config::{ParseOptions, WriteOptions};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Open a CoNLL-U file for lazy, record-by-record reading
pub fn open_file(path: &Path) -> Result<RecordReader<BufReader<File>>, IoError> {
    open_file_with_options(path, &ParseOptions::default())
}

/// Open a CoNLL-U file for lazy reading under the given parse options,
/// typically `Config::parse` from a loaded config file
pub fn open_file_with_options(
    path: &Path,
    options: &ParseOptions,
) -> Result<RecordReader<BufReader<File>>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    log::debug!("Opening CoNLL-U file {}", path.display());
    let file = File::open(path)?;
    Ok(RecordReader::with_options(BufReader::new(file), *options))
}

/// Read every record of a CoNLL-U file into memory
pub fn read_file(path: &Path) -> Result<Vec<Record>, IoError> {
    read_file_with_options(path, &ParseOptions::default())
}

/// Read every record of a CoNLL-U file under the given parse options
pub fn read_file_with_options(
    path: &Path,
    options: &ParseOptions,
) -> Result<Vec<Record>, IoError> {
    let records = open_file_with_options(path, options)?.collect::<io::Result<Vec<_>>>()?;
    Ok(records)
}

/// Write records to `sink`, one blank line between consecutive records.
///
/// With `final_blank_line` set the output also ends with a blank line, the
/// usual layout of a `.conllu` file.
pub fn write_records<'a, W, I>(sink: &mut W, records: I, options: &WriteOptions) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a Record>,
{
    let mut first = true;
    for record in records {
        if !first {
            sink.write_all(b"\n")?;
        }
        first = false;
        sink.write_all(record.serialize().as_bytes())?;
        sink.write_all(b"\n")?;
    }
    if options.final_blank_line && !first {
        sink.write_all(b"\n")?;
    }
    Ok(())
}

/// Write records to a CoNLL-U file, replacing any existing content
pub fn write_file<'a, I>(path: &Path, records: I, options: &WriteOptions) -> Result<(), IoError>
where
    I: IntoIterator<Item = &'a Record>,
{
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    log::debug!("Writing CoNLL-U file {}", path.display());
    let mut writer = BufWriter::new(File::create(path)?);
    write_records(&mut writer, records, options)?;
    writer.flush()?;
    Ok(())
}
