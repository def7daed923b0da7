use inner::doc_inline_reexport;

doc_inline_reexport! {
    chained_hash_map,
    min_heap,
}
