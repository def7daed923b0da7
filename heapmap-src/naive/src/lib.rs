use inner::doc_inline_reexport;

doc_inline_reexport! {
    scan_map,
}
