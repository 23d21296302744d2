use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const ENTRY: &str = "assets/css/main.css";
const OUT_DIR: &str = "assets/dist";
const OUT_FILE: &str = "assets/dist/bundle.css";

fn bundle_css() -> Result<String, String> {
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    // Resolves every @import reachable from main.css
    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY))
        .map_err(|e| format!("bundling {ENTRY}: {e}"))?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("minifying: {e}"))?;

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("printing: {e}"))?;

    Ok(css.code)
}

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    fs::create_dir_all(OUT_DIR).expect("Failed to create assets/dist directory");

    let css = match bundle_css() {
        Ok(css) => css,
        Err(e) => panic!("CSS bundling failed: {e}"),
    };

    fs::write(OUT_FILE, css).expect("Failed to write bundle.css");
}
