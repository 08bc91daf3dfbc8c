use uuid::Uuid;

/// A single uploaded file, valid for the lifetime of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedDocument {
    pub id: DocumentId,
    pub filename: String,
    pub kind: DocumentKind,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Csv,
    Xls,
    Xlsx,
}

impl DocumentKind {
    /// Resolves a filename's extension (case-insensitive) to a supported kind.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = filename.rsplit_once('.').map(|(_, e)| e.to_lowercase())?;
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "csv" => Some(Self::Csv),
            "xls" => Some(Self::Xls),
            "xlsx" => Some(Self::Xlsx),
            _ => None,
        }
    }

    pub fn as_extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Csv => "csv",
            Self::Xls => "xls",
            Self::Xlsx => "xlsx",
        }
    }
}

impl UploadedDocument {
    pub fn new(filename: String, kind: DocumentKind, size_bytes: u64) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            kind,
            size_bytes,
        }
    }
}

/// Reduces a client-supplied filename to a safe flat name: the final path
/// component with whitespace collapsed to underscores and anything outside
/// `[A-Za-z0-9._-]` dropped. May yield an empty string.
pub fn sanitize_filename(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    cleaned.trim_matches(['.', '-']).to_string()
}
