use log::{error, info};

use classes2yaml::{emit, EmitOptions};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = EmitOptions::rooted(
        "../datasets/brain-tumor",
        "train/images",
        "valid/images",
        "classes.txt",
    )
    .with_output_path("configs/brain_tumor_data.yaml");

    info!(
        "Generating dataset YAML from {}...",
        options.class_names_file.display()
    );

    if let Err(e) = emit(&options) {
        error!("Failed to create dataset YAML: {}", e);
        std::process::exit(1);
    }
}
