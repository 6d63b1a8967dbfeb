//! Test fixtures: representative JSON payloads from the NWIS dv/iv services.
//!
//! These fixtures are structurally complete but truncated to the minimum
//! needed to exercise the parser. They reflect the real WaterML-as-JSON
//! envelope returned by:
//!   https://nwis.waterservices.usgs.gov/nwis/iv?format=json&...
//!
//! Single-series fixtures are one entry of `value.timeSeries[]`; the
//! `fixture_site_*` fixtures are full response envelopes.
//!
//! Note: measurement values are always JSON strings in the NWIS response,
//! even though they represent numbers. Parsers must handle this.

//! Instantaneous streamflow, six 15-minute records, all approved ("A").
//! The -05:00 offsets normalize to 05:00–06:15 UTC.
#[cfg(test)]
pub(crate) fn fixture_insta_flow() -> &'static str {
    r#"{
      "variable": {
        "variableName": "Streamflow, ft3/s",
        "unit": { "unitCode": "ft3/s" }
      },
      "values": [{
        "value": [
          { "value": "1.79", "qualifiers": ["A"], "dateTime": "2012-10-01T00:00:00.000-05:00" },
          { "value": "1.79", "qualifiers": ["A"], "dateTime": "2012-10-01T00:15:00.000-05:00" },
          { "value": "1.79", "qualifiers": ["A"], "dateTime": "2012-10-01T00:30:00.000-05:00" },
          { "value": "1.82", "qualifiers": ["A"], "dateTime": "2012-10-01T00:45:00.000-05:00" },
          { "value": "1.79", "qualifiers": ["A"], "dateTime": "2012-10-01T01:00:00.000-05:00" },
          { "value": "1.81", "qualifiers": ["A"], "dateTime": "2012-10-01T01:15:00.000-05:00" }
        ]
      }]
    }"#
}

/// Daily maximum streamflow over five days. Daily records carry no UTC
/// offset and a statistic option block.
#[cfg(test)]
pub(crate) fn fixture_daily_flow_max() -> &'static str {
    r#"{
      "variable": {
        "variableName": "Streamflow, ft3/s",
        "options": {
          "option": [
            { "value": "Maximum", "name": "Statistic", "optionCode": "00001" }
          ]
        }
      },
      "values": [{
        "value": [
          { "value": "1.79", "qualifiers": ["A"], "dateTime": "2012-10-01T00:00:00.000" },
          { "value": "1.12", "qualifiers": ["A"], "dateTime": "2012-10-02T00:00:00.000" },
          { "value": "0.74", "qualifiers": ["A"], "dateTime": "2012-10-03T00:00:00.000" },
          { "value": "0.67", "qualifiers": ["A"], "dateTime": "2012-10-04T00:00:00.000" },
          { "value": "1.56", "qualifiers": ["A"], "dateTime": "2012-10-05T00:00:00.000" }
        ]
      }]
    }"#
}

/// One record with two qualifier codes ("P", "e" = provisional, estimated)
/// and one with an empty qualifier list.
#[cfg(test)]
pub(crate) fn fixture_insta_multi_qualifier() -> &'static str {
    r#"{
      "variable": {
        "variableName": "Streamflow, ft3/s",
        "unit": { "unitCode": "ft3/s" }
      },
      "values": [{
        "value": [
          { "value": "42300", "qualifiers": ["P", "e"], "dateTime": "2012-10-01T00:00:00.000-05:00" },
          { "value": "42500", "qualifiers": [], "dateTime": "2012-10-01T00:15:00.000-05:00" }
        ]
      }]
    }"#
}

/// A series with an empty record list: simulates a sensor outage or data
/// gap. Parses to a zero-row table that keeps its column labels.
#[cfg(test)]
pub(crate) fn fixture_insta_empty_records() -> &'static str {
    r#"{
      "variable": {
        "variableName": "Streamflow, ft3/s",
        "unit": { "unitCode": "ft3/s" }
      },
      "values": [{ "value": [] }]
    }"#
}

/// A record whose value field is not numeric. Must be a hard ParseError.
#[cfg(test)]
pub(crate) fn fixture_insta_bad_value() -> &'static str {
    r#"{
      "variable": {
        "variableName": "Streamflow, ft3/s",
        "unit": { "unitCode": "ft3/s" }
      },
      "values": [{
        "value": [
          { "value": "Ice", "qualifiers": ["e"], "dateTime": "2012-12-15T00:00:00.000-05:00" }
        ]
      }]
    }"#
}

/// Full instantaneous response: streamflow and gage height over the same
/// six timestamps. Tests multi-series column union.
#[cfg(test)]
pub(crate) fn fixture_site_insta_flow_and_stage() -> &'static str {
    r#"{
      "value": {
        "timeSeries": [
          {
            "variable": {
              "variableName": "Streamflow, ft3/s",
              "unit": { "unitCode": "ft3/s" }
            },
            "values": [{
              "value": [
                { "value": "1.79", "qualifiers": ["A"], "dateTime": "2012-10-01T00:00:00.000-05:00" },
                { "value": "1.79", "qualifiers": ["A"], "dateTime": "2012-10-01T00:15:00.000-05:00" },
                { "value": "1.79", "qualifiers": ["A"], "dateTime": "2012-10-01T00:30:00.000-05:00" },
                { "value": "1.82", "qualifiers": ["A"], "dateTime": "2012-10-01T00:45:00.000-05:00" },
                { "value": "1.79", "qualifiers": ["A"], "dateTime": "2012-10-01T01:00:00.000-05:00" },
                { "value": "1.81", "qualifiers": ["A"], "dateTime": "2012-10-01T01:15:00.000-05:00" }
              ]
            }]
          },
          {
            "variable": {
              "variableName": "Gage height, ft",
              "unit": { "unitCode": "ft" }
            },
            "values": [{
              "value": [
                { "value": "54.79", "qualifiers": ["A"], "dateTime": "2012-10-01T00:00:00.000-05:00" },
                { "value": "54.79", "qualifiers": ["A"], "dateTime": "2012-10-01T00:15:00.000-05:00" },
                { "value": "54.79", "qualifiers": ["A"], "dateTime": "2012-10-01T00:30:00.000-05:00" },
                { "value": "54.82", "qualifiers": ["A"], "dateTime": "2012-10-01T00:45:00.000-05:00" },
                { "value": "54.79", "qualifiers": ["A"], "dateTime": "2012-10-01T01:00:00.000-05:00" },
                { "value": "54.81", "qualifiers": ["A"], "dateTime": "2012-10-01T01:15:00.000-05:00" }
              ]
            }]
          }
        ]
      }
    }"#
}

/// Full daily response: Maximum and Mean statistics for the same parameter
/// over the same five days.
#[cfg(test)]
pub(crate) fn fixture_site_daily_max_and_mean() -> &'static str {
    r#"{
      "value": {
        "timeSeries": [
          {
            "variable": {
              "variableName": "Streamflow, ft3/s",
              "options": {
                "option": [
                  { "value": "Maximum", "name": "Statistic", "optionCode": "00001" }
                ]
              }
            },
            "values": [{
              "value": [
                { "value": "1.79", "qualifiers": ["A"], "dateTime": "2012-10-01T00:00:00.000" },
                { "value": "1.12", "qualifiers": ["A"], "dateTime": "2012-10-02T00:00:00.000" },
                { "value": "0.74", "qualifiers": ["A"], "dateTime": "2012-10-03T00:00:00.000" },
                { "value": "0.67", "qualifiers": ["A"], "dateTime": "2012-10-04T00:00:00.000" },
                { "value": "1.56", "qualifiers": ["A"], "dateTime": "2012-10-05T00:00:00.000" }
              ]
            }]
          },
          {
            "variable": {
              "variableName": "Streamflow, ft3/s",
              "options": {
                "option": [
                  { "value": "Mean", "name": "Statistic", "optionCode": "00003" }
                ]
              }
            },
            "values": [{
              "value": [
                { "value": "1.65", "qualifiers": ["A"], "dateTime": "2012-10-01T00:00:00.000" },
                { "value": "1.04", "qualifiers": ["A"], "dateTime": "2012-10-02T00:00:00.000" },
                { "value": "0.68", "qualifiers": ["A"], "dateTime": "2012-10-03T00:00:00.000" },
                { "value": "0.65", "qualifiers": ["A"], "dateTime": "2012-10-04T00:00:00.000" },
                { "value": "1.41", "qualifiers": ["A"], "dateTime": "2012-10-05T00:00:00.000" }
              ]
            }]
          }
        ]
      }
    }"#
}
