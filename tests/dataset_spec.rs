use std::io::Write;

use launch_dash::dataset::{Dataset, DatasetError};
use launch_dash::models::*;
use speculate2::speculate;
use tempfile::NamedTempFile;

const HEADER: &str =
    "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n";

fn write_csv(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(body.as_bytes()).expect("Failed to write CSV");
    file
}

fn load(body: &str) -> Result<Dataset, DatasetError> {
    let file = write_csv(body);
    Dataset::load(file.path())
}

speculate! {
    before {
        let fixture = format!(
            "{}{}",
            HEADER,
            "1,CCAFS LC-40,0,525,F9 v1.0  B0005,v1.0\n\
             2,VAFB SLC-4E,1,9600,F9 FT B1029.1,FT\n\
             3,CCAFS LC-40,1,2034,F9 FT B1019,FT\n\
             4,KSC LC-39A,1,0,F9 FT B1031.1,FT\n"
        );
    }

    describe "load" {
        it "reads every row in file order" {
            let dataset = load(&fixture).expect("Failed to load");

            assert_eq!(dataset.len(), 4);
            let flights: Vec<u32> = dataset.records().iter().map(|r| r.flight_number).collect();
            assert_eq!(flights, vec![1, 2, 3, 4]);
        }

        it "parses each field of a record" {
            let dataset = load(&fixture).expect("Failed to load");
            let first = &dataset.records()[0];

            assert_eq!(first.launch_site, "CCAFS LC-40");
            assert_eq!(first.payload_mass_kg, 525.0);
            assert_eq!(first.booster_version, "F9 v1.0  B0005");
            assert_eq!(first.booster_version_category, "v1.0");
            assert_eq!(first.outcome, Outcome::Failure);
        }

        it "ignores unknown columns" {
            let body = ",Launch Site,class,Payload Mass (kg),Booster Version Category,Notes\n\
                        0,KSC LC-39A,1,2490.0,FT,first reuse\n";
            let dataset = load(body).expect("Failed to load");

            assert_eq!(dataset.records()[0].launch_site, "KSC LC-39A");
            assert_eq!(dataset.records()[0].outcome, Outcome::Success);
        }

        it "defaults optional columns" {
            let body = "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                        A,1,100,FT\n\
                        B,0,200,B4\n";
            let dataset = load(body).expect("Failed to load");

            assert_eq!(dataset.records()[1].flight_number, 2);
            assert_eq!(dataset.records()[1].booster_version, "B4");
        }

        it "accepts float-formatted class values" {
            let body = format!("{}1,A,1.0,100,F9,FT\n2,A,0.0,200,F9,FT\n", HEADER);
            let dataset = load(&body).expect("Failed to load");

            assert!(dataset.records()[0].is_success());
            assert!(!dataset.records()[1].is_success());
        }
    }

    describe "load failures" {
        it "reports a missing file" {
            let err = Dataset::load("/nonexistent/launches.csv").unwrap_err();
            assert!(matches!(err, DatasetError::Io { .. }));
        }

        it "rejects a table without a required column" {
            let err = load("Launch Site,class,Payload Mass (kg)\nA,1,100\n").unwrap_err();
            assert!(matches!(err, DatasetError::MissingColumn(ref c) if c == "Booster Version Category"));
        }

        it "rejects a header-only table" {
            let err = load(HEADER).unwrap_err();
            assert!(matches!(err, DatasetError::Empty));
        }

        it "rejects a negative payload" {
            let body = format!("{}1,A,1,100,F9,FT\n2,A,1,-5,F9,FT\n", HEADER);
            let err = load(&body).unwrap_err();
            assert!(matches!(err, DatasetError::InvalidPayload { row: 2, .. }));
        }

        it "rejects a non-numeric payload" {
            let body = format!("{}1,A,1,heavy,F9,FT\n", HEADER);
            let err = load(&body).unwrap_err();
            assert_eq!(err.to_string(), "row 1: invalid payload mass 'heavy'");
        }

        it "rejects an unknown outcome class" {
            let body = format!("{}1,A,2,100,F9,FT\n", HEADER);
            let err = load(&body).unwrap_err();
            assert!(matches!(err, DatasetError::InvalidOutcome { row: 1, ref value } if value == "2"));
        }

        it "rejects records built with non-finite payloads" {
            let err = Dataset::from_records(vec![LaunchRecord {
                flight_number: 1,
                launch_site: "A".to_string(),
                payload_mass_kg: f64::NAN,
                booster_version: "F9".to_string(),
                booster_version_category: "FT".to_string(),
                outcome: Outcome::Success,
            }])
            .unwrap_err();
            assert!(matches!(err, DatasetError::InvalidPayload { row: 1, .. }));
        }
    }

    describe "summary" {
        it "computes payload bounds" {
            let dataset = load(&fixture).expect("Failed to load");
            let summary = dataset.summary();

            assert_eq!(summary.min_payload, 0.0);
            assert_eq!(summary.max_payload, 9600.0);
            assert_eq!(summary.payload_range(), PayloadRange::new(0.0, 9600.0));
        }

        it "lists distinct sites sorted by name" {
            let dataset = load(&fixture).expect("Failed to load");

            assert_eq!(
                dataset.summary().sites,
                vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]
            );
            assert!(dataset.summary().has_site("KSC LC-39A"));
            assert!(!dataset.summary().has_site("CCAFS SLC-40"));
        }

        it "counts successes and failures" {
            let dataset = load(&fixture).expect("Failed to load");

            assert_eq!(dataset.summary().launches, 4);
            assert_eq!(dataset.summary().successes, 3);
            assert_eq!(dataset.summary().failures(), 1);
        }

        it "starts the default selector at all sites over the full range" {
            let dataset = load(&fixture).expect("Failed to load");
            let state = dataset.default_selector();

            assert_eq!(state.site, SiteChoice::All);
            assert_eq!(state.payload_range, PayloadRange::new(0.0, 9600.0));
        }
    }

    describe "bundled dataset" {
        it "loads the sample launch table" {
            let path = concat!(env!("CARGO_MANIFEST_DIR"), "/spacex_launch_dash.csv");
            let dataset = Dataset::load(path).expect("Failed to load sample");

            assert_eq!(dataset.summary().sites.len(), 4);
            assert!(dataset.summary().max_payload <= 10000.0);
        }
    }
}
