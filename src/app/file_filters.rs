/// Filter string for the open/save choosers.
///
/// FLTK format: "Description\tPattern\nDescription2\tPattern2".
/// FLTK adds "All Files (*)" itself, so it is not listed here.
pub fn note_files_filter() -> String {
    [
        "Markdown Files\t*.{md,markdown,mdown}",
        "Text Files\t*.txt",
    ]
    .join("\n")
}
