use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use rs_dice_core::model::die::Face;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> std::io::Result<Vec<String>> {
    let mut contents = String::new();
    File::open(filename)?.read_to_string(&mut contents)?;
    Ok(contents.lines().map(str::to_owned).collect())
}

/// Parses face/weight rows into parallel lists for die construction.
///
/// One face per line, optionally followed by a comma and its weight:
/// ```text
/// # english letter frequencies
/// E,12.7
/// T,9.1
/// Q
/// ```
/// - Missing weight defaults to 1.0
/// - Faces that parse as integers become numeric faces
/// - `#` comments and blank lines are skipped
///
/// # Errors
/// Returns an error if a weight fails to parse as a number. Weight
/// positivity is left to `Die::with_weights`.
pub(crate) fn parse_faces(lines: &[String]) -> Result<(Vec<Face>, Vec<f64>), Box<dyn Error>> {
    let mut faces = Vec::new();
    let mut weights = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (label, weight) = match line.split_once(',') {
            Some((label, weight)) => {
                let weight: f64 = weight
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid weight in line: {}", line))?;
                (label.trim(), weight)
            }
            None => (line, 1.0),
        };

        let face = match label.parse::<i64>() {
            Ok(n) => Face::Num(n),
            Err(_) => Face::Text(label.to_owned()),
        };
        faces.push(face);
        weights.push(weight);
    }

    Ok((faces, weights))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_parse_faces_with_and_without_weights() {
        let (faces, weights) =
            parse_faces(&lines(&["# header", "", "E,12.7", "Q", "7,2.5"])).unwrap();
        assert_eq!(
            faces,
            vec![Face::Text("E".to_owned()), Face::Text("Q".to_owned()), Face::Num(7)]
        );
        assert_eq!(weights, vec![12.7, 1.0, 2.5]);
    }

    #[test]
    fn test_parse_faces_bad_weight() {
        assert!(parse_faces(&lines(&["E,heavy"])).is_err());
    }
}
