use std::env;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_job_tables(&out_dir);

    println!("cargo:rerun-if-changed=data/jobs.csv");
}

fn generate_job_tables(out_dir: &str) {
    let csv = fs::read_to_string("data/jobs.csv").expect("failed to read jobs.csv");

    let mut names = phf_codegen::Map::new();
    let mut roles = phf_codegen::Map::new();
    let mut name_literals = Vec::new();
    let mut role_literals = Vec::new();

    for line in csv.lines().skip(1) {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 3 {
            continue;
        }
        let id: u32 = match fields[0].trim().parse() {
            Ok(v) => v,
            Err(_) => continue,
        };
        name_literals.push((id, format!("\"{}\"", fields[1].trim())));

        let role = fields[2].trim();
        if !role.is_empty() {
            role_literals.push((id, format!("Role::{}", role)));
        }
    }

    for (id, name) in &name_literals {
        names.entry(*id, name);
    }
    for (id, role) in &role_literals {
        roles.entry(*id, role);
    }

    let path = Path::new(out_dir).join("job_tables.rs");
    let mut file = BufWriter::new(fs::File::create(&path).unwrap());

    writeln!(
        file,
        "pub static JOB_NAMES: phf::Map<u32, &'static str> = {};",
        names.build()
    )
    .unwrap();
    writeln!(file, "pub static JOB_ROLES: phf::Map<u32, Role> = {};", roles.build()).unwrap();
}
