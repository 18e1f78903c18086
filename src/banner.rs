// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
 _       _     _          _ _
| |     | |   | |        | (_)
| | __ _| |__ | | ___  __| |_ _ __   __ _
| |/ _` | '_ \| |/ _ \/ _` | | '_ \ / _` |
| | (_| | |_) | |  __/ (_| | | | | | (_| |
|_|\__,_|_.__/|_|\___|\__,_|_|_| |_|\__, |
                                     __/ |
                                    |___/

    L(h,k) Graph-Labeling Solver Service
"#;
    println!("{}", banner);
}
