//! Human-readable run summary.

use iconfont_core::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    print!("{}", format_summary(summary));
}

pub fn format_summary(summary: &RunSummary) -> String {
    let class_name = &summary.class_name;
    let mut out = String::new();

    out.push_str(&format!("\nOutput directory: {}\n", summary.output_dir.display()));
    out.push_str(&format!("Number of icons processed: {}\n", summary.icon_count));
    if summary.fallback_count > 0 {
        out.push_str(&format!(
            "Icons replaced by the fallback glyph: {} (run with RUST_LOG=warn for details)\n",
            summary.fallback_count
        ));
    }

    out.push_str("\nGenerated files:\n");
    out.push_str(&format!("- {class_name}_icons.dart (Dart class with icon definitions)\n"));
    out.push_str(&format!("- fonts/{class_name}.ttf (Icon font file)\n"));
    out.push_str("- README.md (Usage instructions)\n");

    out.push_str("\nNext steps:\n");
    out.push_str("1. Copy the generated folder to your Flutter project\n");
    out.push_str("2. Add the font to your pubspec.yaml as shown in the README\n");
    out.push_str(&format!("3. Import the {class_name}_icons.dart file in your code\n"));
    out.push_str(&format!("4. Use the icons with {class_name}.iconName\n"));
    out
}
