use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed name of the real launch records resource.
const DATASET_FILE: &str = "spacex_launch_dash.csv";
/// Synthetic rows for development builds. Not real launch statistics.
const SAMPLE_FILE: &str = "../fixtures/launch_sample.csv";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join(DATASET_FILE);

    // Real dataset: $SXL_LAUNCH_CSV, else spacex_launch_dash.csv at the
    // workspace root
    let dataset = env::var_os("SXL_LAUNCH_CSV")
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new("..").join(DATASET_FILE));

    let source = if dataset.exists() {
        fs::copy(&dataset, &dest).unwrap();
        "dataset"
    } else {
        println!(
            "cargo:warning={} not found; embedding synthetic sample data, not real launch records",
            dataset.display()
        );
        let sample = Path::new(SAMPLE_FILE);
        if sample.exists() {
            fs::copy(sample, &dest).unwrap();
        } else {
            fs::write(
                &dest,
                ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n\
                 0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0\n\
                 1,30,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT\n",
            )
            .unwrap();
        }
        "sample"
    };
    println!("cargo:rustc-env=SXL_DATASET_SOURCE={}", source);

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SXL_LAUNCH_CSV");
    println!("cargo:rerun-if-changed={}", dataset.display());
    println!("cargo:rerun-if-changed={}", SAMPLE_FILE);
}
