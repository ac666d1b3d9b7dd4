fn main() {
    // The generated parser is not checked in; `tree-sitter generate` writes
    // it next to grammar.js:
    //   src/
    //     parser.c
    //     scanner.c      (optional, hand-written)
    //     tree_sitter/*  (generated headers)
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let src_dir = manifest_dir.join("src");
    let parser_path = src_dir.join("parser.c");
    let scanner_path = src_dir.join("scanner.c");

    println!("cargo:rustc-check-cfg=cfg(baml_parser_missing)");
    println!("cargo:rerun-if-changed={}", parser_path.display());
    println!("cargo:rerun-if-changed={}", scanner_path.display());
    println!("cargo:rerun-if-changed={}", manifest_dir.join("grammar.js").display());

    if !parser_path.exists() {
        println!(
            "cargo:warning={} not found; run `tree-sitter generate` to link the BAML grammar",
            parser_path.display()
        );
        println!("cargo:rustc-cfg=baml_parser_missing");
        return;
    }

    let mut build = cc::Build::new();

    build
        .std("c11")
        .include(&src_dir)
        .warnings(false)
        .flag_if_supported("-Wno-unused-parameter")
        .flag_if_supported("-Wno-unused-but-set-variable")
        .flag_if_supported("-Wno-trigraphs");

    #[cfg(target_env = "msvc")]
    build.flag("-utf-8");

    build.file(&parser_path);
    if scanner_path.exists() {
        build.file(&scanner_path);
    }

    build.compile("tree-sitter-baml");
}
