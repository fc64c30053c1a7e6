use thiserror::Error;

/// Expected comma-separated fields per record:
/// timestamp, temperature, humidity, co2_ppm, voltage, current_mA.
pub const FIELD_COUNT: usize = 6;

/// One fully parsed sensor record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: i64,
    pub temperature: f64,
    pub humidity: f64,
    pub co2_ppm: f64,
    pub voltage: f64,
    pub current_ma: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("expected {FIELD_COUNT} fields, got {0}")]
    FieldCount(usize),
    #[error("invalid timestamp {0:?}")]
    Timestamp(String),
    #[error("invalid {name} value {value:?}")]
    Value { name: &'static str, value: String },
}

/// Parse one raw line into a [`Sample`].
///
/// Lines with the wrong field count or an unparsable value are rejected;
/// the caller decides whether to count and skip them.
pub fn parse_line(line: &str) -> Result<Sample, ParseError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(ParseError::FieldCount(fields.len()));
    }

    let timestamp = fields[0]
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseError::Timestamp(fields[0].to_string()))?;

    Ok(Sample {
        timestamp,
        temperature: parse_value(fields[1], "temperature")?,
        humidity: parse_value(fields[2], "humidity")?,
        co2_ppm: parse_value(fields[3], "co2_ppm")?,
        voltage: parse_value(fields[4], "voltage")?,
        current_ma: parse_value(fields[5], "current_mA")?,
    })
}

fn parse_value(field: &str, name: &'static str) -> Result<f64, ParseError> {
    field.trim().parse::<f64>().map_err(|_| ParseError::Value {
        name,
        value: field.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_line() {
        let sample = parse_line("10,21.5,40.0,410.0,3.3,120.0").unwrap();
        assert_eq!(sample.timestamp, 10);
        assert_eq!(sample.temperature, 21.5);
        assert_eq!(sample.humidity, 40.0);
        assert_eq!(sample.co2_ppm, 410.0);
        assert_eq!(sample.voltage, 3.3);
        assert_eq!(sample.current_ma, 120.0);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let sample = parse_line(" 11 , 21.6 ,40.1,411.0,3.3, 121.0 ").unwrap();
        assert_eq!(sample.timestamp, 11);
        assert_eq!(sample.current_ma, 121.0);
    }

    #[test]
    fn rejects_short_line() {
        assert_eq!(
            parse_line("10,21.5,40.0"),
            Err(ParseError::FieldCount(3))
        );
    }

    #[test]
    fn rejects_long_line() {
        assert_eq!(
            parse_line("10,21.5,40.0,410.0,3.3,120.0,extra"),
            Err(ParseError::FieldCount(7))
        );
    }

    #[test]
    fn rejects_empty_line() {
        // A bare split still yields one (empty) field.
        assert_eq!(parse_line(""), Err(ParseError::FieldCount(1)));
    }

    #[test]
    fn rejects_bad_timestamp() {
        let err = parse_line("abc,21.5,40.0,410.0,3.3,120.0").unwrap_err();
        assert_eq!(err, ParseError::Timestamp("abc".to_string()));
    }

    #[test]
    fn rejects_fractional_timestamp() {
        assert!(matches!(
            parse_line("10.5,21.5,40.0,410.0,3.3,120.0"),
            Err(ParseError::Timestamp(_))
        ));
    }

    #[test]
    fn rejects_bad_measurement() {
        let err = parse_line("10,21.5,40.0,n/a,3.3,120.0").unwrap_err();
        assert_eq!(
            err,
            ParseError::Value {
                name: "co2_ppm",
                value: "n/a".to_string(),
            }
        );
    }

    #[test]
    fn accepts_negative_values() {
        let sample = parse_line("0,-4.5,40.0,410.0,3.3,-0.5").unwrap();
        assert_eq!(sample.temperature, -4.5);
        assert_eq!(sample.current_ma, -0.5);
    }
}
