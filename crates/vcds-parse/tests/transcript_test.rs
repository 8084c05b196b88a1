//! End-to-end tests over a full auto-scan transcript
//!
//! Run with: cargo test -p vcds-parse --test transcript_test

use pretty_assertions::assert_eq;
use vcds_core::{DiagnosticRecord, FaultStatus, HeaderField};
use vcds_parse::{parse, parse_with_diagnostics, segment_addresses, SkipReason};

const SCAN: &str = "\
Monday,15,April,2024,10:23:45:12345
VCDS -- Windows Based VAG/VAS Emulator Running on Windows 10 x64
VCDS Version: Release 23.3.0.0 (x64)
Data version: 20230821 DS341.0
Date: 2024-04-15 10:23:45
www.Ross-Tech.com

VIN: WVWZZZAUZEW123456   License Plate:
Mileage: 95340km-59242mi   Repair Order:

--------------------------------------------------------------------------------
Chassis Type: BE1-VW37 (5Q0)
Scan: 01 03 09 17 19 44

01-Engine -- Status: OK 0000
03-Brakes 1 -- Status: OK 0000
09-Cent. Elect. -- Status: Malfunction 0010
17-Instruments -- Status: Malfunction 0010
19-CAN Gateway -- Status: OK 0000
44-Steering Assist -- Status: OK 0000

-------------------------------------------------------------------------------
Address 01: Engine (J623-DJH)       Labels:| 06K-907-425-V1.clb
   Part No SW: 8V0 906 259 K    HW: 04E 907 309 AB
   Component: R4 1,8l TFSI  H07 0001
   Coding: 0F000000
No fault code found.
Readiness: 0000 0000

-------------------------------------------------------------------------------
Address 09: Cent. Elect. (J519)       Labels:| 5Q0-937-08X-V1.clb
   Part No SW: 5Q0 937 084 CD    HW: 5Q0 937 084 CD
2 Faults Found:
1041 - Battery Voltage
          P0562 00 [008] - Too Low
          Intermittent - Confirmed - Tested Since Memory Clear
             Freeze Frame:
                    Fault Status: 00000001
                    Fault Priority: 6
2070 - Interior Light Circuit
          B1234 01 [009] - Open Circuit
          Confirmed - Tested Since Memory Clear

-------------------------------------------------------------------------------
Address 17: Instruments (J285)       Labels:| 5G0-920-XXX-17.clb
1 Fault Found:
01 - Battery Voltage
            P0000 - Intermittent

-------------------------------------------------------------------------------
Address 19: CAN Gateway        Labels:| 5Q0-907-530-V1.clb
No fault code found.

-------------------------------------------------------------------------------
Address 44: Steering Assist (J500)       Labels:| 5Q0-909-144-V2.clb
   Cannot be reached

End----------------------------------------------------------------------------
";

#[test]
fn test_header_fields() {
    let record = parse(SCAN);
    let info = &record.vehicle_info;
    assert_eq!(info.get(HeaderField::Vin), Some("WVWZZZAUZEW123456"));
    assert_eq!(info.get(HeaderField::Mileage), Some("95340km-59242mi"));
    assert_eq!(info.get(HeaderField::Date), Some("2024-04-15 10:23:45"));
    assert_eq!(info.get(HeaderField::ToolVersion), Some("23.3.0.0"));
}

#[test]
fn test_module_status_lines() {
    let record = parse(SCAN);
    let modules: Vec<(&str, &str)> = record
        .modules
        .iter()
        .map(|m| (m.module.as_str(), m.status.as_str()))
        .collect();
    assert_eq!(
        modules,
        vec![
            ("01-Engine", "OK 0000"),
            ("03-Brakes 1", "OK 0000"),
            ("09-Cent. Elect.", "Malfunction 0010"),
            ("17-Instruments", "Malfunction 0010"),
            ("19-CAN Gateway", "OK 0000"),
            ("44-Steering Assist", "OK 0000"),
        ]
    );
}

#[test]
fn test_fault_blocks() {
    let (record, diagnostics) = parse_with_diagnostics(SCAN);

    let addresses: Vec<&str> = record.faults.iter().map(|b| b.address.as_str()).collect();
    assert_eq!(addresses, vec!["09", "17"]);

    let cent = record.block("09").unwrap();
    assert_eq!(cent.description, "Cent. Elect. (J519)       Labels:| 5Q0-937-08X-V1.clb");
    assert_eq!(cent.codes.len(), 2);
    assert_eq!(cent.codes[0].code_line, "1041 - Battery Voltage");
    assert_eq!(cent.codes[0].status, FaultStatus::Intermittent);
    assert!(cent.codes[0].details.ends_with("Fault Priority: 6"));
    assert_eq!(cent.codes[1].code_line, "2070 - Interior Light Circuit");
    assert_eq!(
        cent.codes[1].details,
        "B1234 01 [009] - Open Circuit\nConfirmed - Tested Since Memory Clear"
    );
    assert_eq!(cent.codes[1].status, FaultStatus::Confirmed);

    let instruments = record.block("17").unwrap();
    assert_eq!(instruments.codes.len(), 1);
    assert_eq!(instruments.codes[0].status, FaultStatus::Intermittent);

    assert_eq!(diagnostics.segments, 5);
    assert_eq!(diagnostics.skipped_for(SkipReason::NoFaultCode), 2);
    assert_eq!(diagnostics.skipped_for(SkipReason::MissingSummary), 1);
    assert!(diagnostics.counts_consistent());
    assert_eq!(record.intermittent_count(), 2);
}

#[test]
fn test_every_block_is_non_empty() {
    let record = parse(SCAN);
    assert!(record.faults.iter().all(|b| !b.codes.is_empty()));
}

#[test]
fn test_segments_partition_transcript_tail() {
    let segments = segment_addresses(SCAN);
    let first = segments[0].offset;
    let rebuilt: String = segments.iter().flat_map(|s| [s.header, s.body]).collect();
    assert_eq!(rebuilt, &SCAN[first..]);

    for pair in segments.windows(2) {
        let end_of_first = pair[0].offset + pair[0].header.len() + pair[0].body.len();
        assert_eq!(end_of_first, pair[1].offset);
    }
}

#[test]
fn test_record_json_round_trip() {
    let record = parse(SCAN);
    let json = record.to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["vehicle_info"]["VIN"], "WVWZZZAUZEW123456");
    assert_eq!(value["faults"][0]["codes"][0]["code_line"], "1041 - Battery Voltage");

    let back = DiagnosticRecord::from_json(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let scan_path = dir.path().join("scan.txt");
    let json_path = dir.path().join("scan.json");
    std::fs::write(&scan_path, SCAN).unwrap();

    let record = vcds_parse::parse_file(&scan_path).unwrap();
    vcds_parse::write_record(&json_path, &record).unwrap();
    let back = vcds_parse::read_record(&json_path).unwrap();

    assert_eq!(back, record);
}

#[test]
fn test_transcript_without_addresses() {
    let header_only = &SCAN[..SCAN.find("Address 01").unwrap()];
    let record = parse(header_only);
    assert!(record.faults.is_empty());
    assert_eq!(record.modules.len(), 6);
}
