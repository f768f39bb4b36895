use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use tokio::fs;
use tracing::{error, info};

use crate::inventory::extract::PhoneInventory;
use crate::utils::constants::{
    ALL_PHONE_NUMBERS_FILE, UNASSIGNED_PHONE_NUMBERS_FILE, USER_EMAILS_FILE, USER_EXTENSIONS_FILE,
    USER_PHONE_NUMBERS_FILE,
};

const INDENT: &[u8] = b"    ";

/// Pretty layout with every non-ASCII character written as a `\uXXXX` escape
/// (UTF-16 surrogate pairs above U+FFFF), lowercase hex.
struct AsciiPrettyFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl<'a> AsciiPrettyFormatter<'a> {
    fn with_indent(indent: &'a [u8]) -> Self {
        Self { pretty: PrettyFormatter::with_indent(indent) }
    }
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Pretty JSON with a 4-space indent, `": "` separators, ASCII-only output
/// and no trailing newline.
/// Key order is whatever the value serializes in; `BTreeMap` keeps it sorted.
pub fn to_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, AsciiPrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(out)
}

pub async fn write_json_map(path: &Path, map: &BTreeMap<String, String>) -> Result<()> {
    let bytes = to_json_bytes(map)?;
    fs::write(path, bytes)
        .await
        .inspect(|_| info!("wrote {} entries to '{}'", map.len(), path.display()))
        .inspect_err(|err| error!("failed to write '{}': {}", path.display(), err))?;
    Ok(())
}

/// Writes one file per map into `output_dir`.
///
/// Files are written one after another; if a write fails, the files written
/// before it stay on disk.
pub async fn write_inventory(
    output_dir: &Path,
    user_emails: &BTreeMap<String, String>,
    phones: &PhoneInventory,
    unassigned_only: bool,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).await?;

    let mut outputs: Vec<(&str, &BTreeMap<String, String>)> = Vec::new();
    if !unassigned_only {
        outputs.push((USER_PHONE_NUMBERS_FILE, &phones.user_phone_numbers));
        outputs.push((ALL_PHONE_NUMBERS_FILE, &phones.all_numbers));
        outputs.push((USER_EXTENSIONS_FILE, &phones.user_extensions));
    }
    outputs.push((UNASSIGNED_PHONE_NUMBERS_FILE, &phones.unassigned_numbers));
    outputs.push((USER_EMAILS_FILE, user_emails));

    let mut written = Vec::with_capacity(outputs.len());
    for (file_name, map) in outputs {
        let path = output_dir.join(file_name);
        write_json_map(&path, map).await?;
        written.push(path);
    }
    Ok(written)
}
