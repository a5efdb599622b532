use fltk::text::TextBuffer;

/// Full buffer text, without the leak in `TextBuffer::text()`.
///
/// fltk-rs copies the string from `Fl_Text_Buffer_text()` and never frees
/// the C copy; the preview reads the whole note on every keystroke.
pub fn buffer_text_no_leak(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: the returned pointer is malloc'd by FLTK and owned by us.
    unsafe {
        let ptr = Fl_Text_Buffer_text(buf.as_ptr() as *mut std::ffi::c_void);
        if ptr.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        text
    }
}
