// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![cfg(feature = "serde")]

use aip::{AipDocument, DocumentStatus, Node, SectionType};

const DOCUMENT: &str = r#"{
  "id": "65f1c0de",
  "title": "Hamburg Aerodrome",
  "documentType": "AIP",
  "country": "DE",
  "airport": "EDDH",
  "airacCycle": "2612",
  "effectiveDate": "2026-11-05T00:00:00Z",
  "status": "published",
  "metadata": {
    "authority": "Deutsche Flugsicherung GmbH",
    "contact": "ais@dfs.de",
    "language": "de",
    "lastReview": "2026-06-01T00:00:00Z"
  },
  "sections": [
    {
      "type": "AD",
      "title": "Aerodromes",
      "subsections": [
        {
          "code": "2.2",
          "title": "Aerodrome geographical and administrative data",
          "isMandatory": true,
          "lastModified": "2026-10-01T08:30:00Z",
          "content": {
            "type": "doc",
            "content": [
              {
                "type": "paragraph",
                "content": [{ "type": "text", "text": "ARP 533750N 0095917E" }]
              },
              { "type": "horizontalRule" },
              {
                "type": "paragraph",
                "content": [{ "type": "text", "text": "ELEV 53 ft" }]
              }
            ]
          },
          "images": [
            { "filename": "eddh-adc.png", "originalName": "Aerodrome chart", "size": 524288 }
          ]
        }
      ]
    }
  ]
}"#;

#[test]
fn reads_editor_document() {
    let doc: AipDocument = serde_json::from_str(DOCUMENT).expect("document should deserialize");

    assert_eq!(doc.airport.as_deref(), Some("EDDH"));
    assert_eq!(doc.status, DocumentStatus::Published);
    assert_eq!(doc.metadata.language(), Some("de"));

    let (section, subsection) = doc.subsections().next().expect("one subsection");
    assert_eq!(section.section_type, SectionType::Ad);
    assert_eq!(subsection.code, "2.2");
    assert!(subsection.is_mandatory);
    assert_eq!(subsection.images[0].original_name, "Aerodrome chart");
    assert_eq!(subsection.text(), "ARP 533750N 0095917E\nELEV 53 ft\n");
}

#[test]
fn unknown_nodes_are_kept_as_unsupported() {
    let node: Node = serde_json::from_str(r#"{"type": "horizontalRule"}"#).expect("node");
    assert_eq!(
        node,
        Node::Unsupported {
            kind: "horizontalRule".to_string(),
            content: Vec::new()
        }
    );
    assert_eq!(node.text(), "");
}

#[test]
fn text_of_unknown_containers() {
    let node: Node = serde_json::from_str(
        r#"{
          "type": "codeBlock",
          "content": [{ "type": "text", "text": "ARP 533750N 0095917E" }]
        }"#,
    )
    .expect("node");

    assert_eq!(node.kind(), "codeBlock");
    assert_eq!(node.text(), "ARP 533750N 0095917E\n");

    let json = serde_json::to_value(&node).expect("node should serialize");
    assert_eq!(json["type"], "codeBlock");
    assert_eq!(json["content"][0]["text"], "ARP 533750N 0095917E");
}

#[test]
fn minimal_document() {
    let doc: AipDocument =
        serde_json::from_str(r#"{"title": "Germany AIP", "country": "DE"}"#).expect("document");

    assert_eq!(doc.status, DocumentStatus::Draft);
    assert!(doc.airac_cycle.is_empty());
    assert!(doc.sections.is_empty());
}
