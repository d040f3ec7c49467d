use pretty_assertions::assert_eq;

use mdf_gen::models::SheetData;
use mdf_gen::services::{assembler, dictionary, properties, AttributeRegistry};

fn sheet(name: &str, rows: &[[&str; 16]]) -> SheetData {
    SheetData {
        name: name.to_string(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect(),
    }
}

fn ends_sheet(name: &str, rows: &[[&str; 4]]) -> SheetData {
    SheetData {
        name: name.to_string(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect(),
    }
}

fn node_sheets() -> Vec<SheetData> {
    vec![
        sheet(
            "Person",
            &[
                [
                    "SRC_AGE", "x", "age", "Age", "int", "None", "0", "None", "None", "None",
                    "None", "Yes", "No", "Yes", "Person's age", "None",
                ],
                [
                    "SRC_SSN", "x", "ssn", "SSN", "string", "None", "None", "None", "None",
                    "None", "None", "Yes", "Yes", "No", "Social security number", "None",
                ],
                [
                    "ignored", "x", "None", "None", "string", "None", "None", "None", "None",
                    "None", "None", "No", "No", "No", "None", "None",
                ],
            ],
        ),
        sheet(
            "Car",
            &[
                [
                    "SRC_STATUS", "x", "status", "Status", "string", "Of Enumeration", "None",
                    "None", "None", "None", "active, retired", "No", "No", "Yes", "Car status",
                    "None",
                ],
                [
                    "SRC_WEIGHT", "x", "weight", "Weight", "float", "None", "None", "None",
                    "None", "None", "None", "No", "No", "No", "Car weight", "kg",
                ],
            ],
        ),
    ]
}

fn edge_sheets() -> Vec<SheetData> {
    vec![
        ends_sheet(
            "Relationships",
            &[
                ["Owns", "Person", "Car", "1:N"],
                ["Drives", "Person", "Car", "N:N"],
            ],
        ),
        sheet(
            "Owns",
            &[[
                "SRC_SINCE", "x", "since", "Since", "datetime", "None", "None", "None", "None",
                "None", "None", "No", "No", "No", "Ownership start", "None",
            ]],
        ),
    ]
}

fn definition_rows(rows: &[[&str; 2]]) -> SheetData {
    SheetData {
        name: "Definitions".to_string(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect(),
    }
}

fn run_pipeline() -> (String, String, String) {
    let nodes = node_sheets();
    let edges = edge_sheets();
    let definitions =
        assembler::read_definitions(&definition_rows(&[["Person", "A human"], ["Car", "A vehicle"]]));
    assembler::validate_definitions(&definitions, &nodes).unwrap();

    let mut registry = AttributeRegistry::new();
    let document = assembler::assemble(&nodes, &edges, Some(&definitions), &mut registry).unwrap();

    (
        assembler::render(&document),
        properties::render(&registry),
        dictionary::render(&registry),
    )
}

#[test]
fn model_file_content() {
    let (model, _, _) = run_pipeline();
    let expected = "\
Nodes:
  Person:
    Category: A human
    Props:
      - age
      - ssn
  Car:
    Category: A vehicle
    Props:
      - status
      - weight
Relationships:
  Owns:
    Mul: 1:N
    Ends:
      - Src: Person
        Dst: Car
    Props:
      - since
  Drives:
    Mul: N:N
    Ends:
      - Src: Person
        Dst: Car
    Props: null
";
    assert_eq!(model, expected);
}

#[test]
fn properties_file_content() {
    let (_, props, _) = run_pipeline();
    let expected = "\
PropDefinitions:
#property of Person
  age:
    Desc: Person's age
    Src: SRC_AGE
    Type: integer
    Req: true
    Private: false
    minimum: 0
#property of Person
  ssn:
    Desc: Social security number
    Src: SRC_SSN
    Type: string
    Req: true
    Private: true
#property of Car
  status:
    Desc: Car status
    Src: SRC_STATUS
    Type:
      - \"active\"
      - \"retired\"
    Req: false
    Private: false
#property of Car
  weight:
    Desc: Car weight
    Src: SRC_WEIGHT
    Type:
      units:
       - kg
      value_type: number
    Req: false
    Private: false
#property of Owns
  since:
    Desc: Ownership start
    Src: SRC_SINCE
    Type: datetime
    Req: false
    Private: false
";
    assert_eq!(props, expected);
}

#[test]
fn dictionary_file_content() {
    let (_, _, dict) = run_pipeline();
    let expected = "\
Attribute Name: age
Description: Person's age
Attribute of Node: Person
Display Name: Age
Required: true
Type: integer
Constraints: None
Enumeration: None

Attribute Name: status
Description: Car status
Attribute of Node: Car
Display Name: Status
Required: false
Type: string
Constraints: Of Enumeration
Enumeration: \"active\", \"retired\"

Attribute Name: weight
Description: Car weight
Attribute of Node: Car
Required: false
Type: number
Constraints: None
Enumeration: None

Attribute Name: since
Description: Ownership start
Attribute of Relationship: Owns
Required: false
Type: datetime
Constraints: None
Enumeration: None

";
    assert_eq!(dict, expected);
}

#[test]
fn every_model_prop_has_one_definition_block_per_context() {
    let (_, props, _) = run_pipeline();
    let nodes = node_sheets();
    let edges = edge_sheets();
    let mut registry = AttributeRegistry::new();
    let document = assembler::assemble(&nodes, &edges, None, &mut registry).unwrap();

    for node in &document.nodes {
        for prop in &node.props {
            assert_eq!(props.matches(&format!("  {}:\n", prop)).count(), 1, "{prop}");
        }
    }
    for relationship in &document.relationships {
        for prop in &relationship.props {
            assert_eq!(props.matches(&format!("  {}:\n", prop)).count(), 1, "{prop}");
        }
    }
}

#[test]
fn generation_is_idempotent() {
    assert_eq!(run_pipeline(), run_pipeline());
}

#[test]
fn definition_mismatch_aborts_before_output() {
    let nodes = vec![
        sheet("Person", &[]),
        sheet("Truck", &[]),
    ];
    let definitions =
        assembler::read_definitions(&definition_rows(&[["Person", "A human"], ["Car", "A vehicle"]]));
    let err = assembler::validate_definitions(&definitions, &nodes).unwrap_err();
    assert!(err.to_string().contains("do not match"));
}

#[test]
fn outputs_round_trip_through_the_filesystem() {
    let (model, props, dict) = run_pipeline();
    let dir = tempfile::tempdir().unwrap();

    let model_path = dir.path().join("model_file.yaml");
    let props_path = dir.path().join("model_properties_file.yaml");
    let dict_path = dir.path().join("data_dictionary.txt");

    std::fs::write(&model_path, &model).unwrap();
    std::fs::write(&props_path, &props).unwrap();
    std::fs::write(&dict_path, &dict).unwrap();

    assert_eq!(std::fs::read_to_string(&model_path).unwrap(), model);
    assert_eq!(std::fs::read_to_string(&props_path).unwrap(), props);
    assert_eq!(std::fs::read_to_string(&dict_path).unwrap(), dict);
}
