use std::path::PathBuf;

use crate::Msg;

/// Extensions the file picker offers. Drops are forwarded unfiltered.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = [".pdf", ".doc", ".docx"];

/// A file chosen by drop or by the picker. Bytes are read when the upload runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
}

impl SelectedFile {
    /// Uses the final path component as the display and upload name.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, path }
    }
}

/// Pointer and picker events of the upload zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropZoneEvent {
    Entered,
    Left,
    Dropped(Vec<SelectedFile>),
    Picked(Vec<SelectedFile>),
}

impl From<DropZoneEvent> for Msg {
    fn from(event: DropZoneEvent) -> Self {
        match event {
            DropZoneEvent::Entered => Msg::DragHoverChanged(true),
            DropZoneEvent::Left => Msg::DragHoverChanged(false),
            DropZoneEvent::Dropped(files) => Msg::DropCompleted(files),
            DropZoneEvent::Picked(files) => Msg::UploadFiles(files),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path_takes_file_name() {
        let file = SelectedFile::from_path("/tmp/docs/policy.pdf");
        assert_eq!(file.name, "policy.pdf");
        assert_eq!(file.path, PathBuf::from("/tmp/docs/policy.pdf"));
    }

    #[test]
    fn picked_files_forward_verbatim() {
        let files = vec![SelectedFile::from_path("a.txt")];
        assert_eq!(
            Msg::from(DropZoneEvent::Picked(files.clone())),
            Msg::UploadFiles(files)
        );
    }
}
