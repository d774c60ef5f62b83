use std::path::Path;

#[test]
fn demos_load_and_validate() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos");
    let demos = ["vlp_in.json", "deviated_producer.yaml"];

    for name in demos {
        let path = root.join(name);
        let well = wf_project::load_well(&path)
            .unwrap_or_else(|e| panic!("Failed to load {}: {}", name, e));
        wf_project::validate_well(&well)
            .unwrap_or_else(|e| panic!("Failed to validate {}: {}", name, e));
    }
}
