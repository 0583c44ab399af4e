fn main() {
    // Stamped into the footer as the build date
    let built_at = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={built_at}");

    println!("cargo:rerun-if-changed=build.rs");
    // content is embedded, so an edit there means a new build
    println!("cargo:rerun-if-changed=content");
}
