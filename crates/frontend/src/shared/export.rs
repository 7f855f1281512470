/// File export helpers: CSV building and browser downloads
use crate::shared::error::AppError;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// Byte-order mark so spreadsheet apps pick UTF-8 for Arabic names
const UTF8_BOM: char = '\u{FEFF}';

/// Types that can be written as one CSV row
pub trait CsvExportable {
    /// Column headers, in output order
    fn headers() -> Vec<&'static str>;

    /// Raw cell values, same order as [`CsvExportable::headers`]
    fn to_csv_row(&self) -> Vec<String>;

    /// Columns that are always wrapped in quotes (free-text fields)
    fn always_quoted() -> &'static [usize] {
        &[]
    }
}

/// CSV document without BOM: comma separated, `\n` line endings
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let quoted = T::always_quoted();
    let mut csv_content = T::headers().join(",");
    csv_content.push('\n');

    for item in data {
        let row: Vec<String> = item
            .to_csv_row()
            .iter()
            .enumerate()
            .map(|(idx, cell)| {
                if quoted.contains(&idx) {
                    quote_csv_cell(cell)
                } else {
                    escape_csv_cell(cell)
                }
            })
            .collect();
        csv_content.push_str(&row.join(","));
        csv_content.push('\n');
    }

    csv_content
}

/// CSV bytes as offered for download, BOM first
pub fn csv_bytes_with_bom(csv: &str) -> Vec<u8> {
    let mut content = String::with_capacity(csv.len() + UTF8_BOM.len_utf8());
    content.push(UTF8_BOM);
    content.push_str(csv);
    content.into_bytes()
}

/// Quote a cell only when it contains a separator, quote or line break
pub fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        quote_csv_cell(cell)
    } else {
        cell.to_string()
    }
}

fn quote_csv_cell(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// Wrap bytes in a Blob and trigger a download through a temporary anchor
pub fn download_bytes(bytes: &[u8], mime: &str, filename: &str) -> Result<(), AppError> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &properties)
        .map_err(|e| AppError::Download(format!("Failed to create blob: {:?}", e)))?;

    download_blob(&blob, filename)
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), AppError> {
    let fail = |what: &str, e: wasm_bindgen::JsValue| AppError::Download(format!("{}: {:?}", what, e));

    let window = web_sys::window().ok_or_else(|| AppError::Download("No window object".into()))?;
    let document = window
        .document()
        .ok_or_else(|| AppError::Download("No document object".into()))?;
    let body = document
        .body()
        .ok_or_else(|| AppError::Download("No body element".into()))?;

    let url = Url::create_object_url_with_blob(blob).map_err(|e| fail("Failed to create object URL", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| fail("Failed to create anchor", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| fail("Failed to cast to anchor", e.into()))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| fail("Failed to set style", e))?;

    body.append_child(&anchor)
        .map_err(|e| fail("Failed to append anchor", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| fail("Failed to remove anchor", e))?;

    Url::revoke_object_url(&url).map_err(|e| fail("Failed to revoke URL", e))?;

    log::info!("Downloaded {}", filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        note: &'static str,
        amount: &'static str,
    }

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Note", "Amount"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.into(), self.note.into(), self.amount.into()]
        }

        fn always_quoted() -> &'static [usize] {
            &[0]
        }
    }

    #[test]
    fn escapes_only_when_needed() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn builds_header_and_rows() {
        let rows = [
            Row { name: "Ali \"Abu\" Saleh", note: "late, twice", amount: "12" },
            Row { name: "Sara", note: "", amount: "7.5" },
        ];
        let csv = build_csv(&rows);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Name,Note,Amount");
        assert_eq!(lines[1], "\"Ali \"\"Abu\"\" Saleh\",\"late, twice\",12");
        assert_eq!(lines[2], "\"Sara\",,7.5");
        assert!(!csv.starts_with(UTF8_BOM));
        assert!(csv.ends_with('\n'));

        let bytes = csv_bytes_with_bom(&csv);
        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
        assert_eq!(&bytes[3..], csv.as_bytes());
    }
}
