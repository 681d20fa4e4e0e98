//! NumPy `.npy` reader for 2-D simulation arrays.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use ndarray::Array2;
use ndarray_npy::{ReadNpyError, ReadNpyExt};

use crate::io::csv_writer::Precision;

/// A loaded array together with the float width it was stored at.
#[derive(Debug, Clone, PartialEq)]
pub struct NpyArray {
    pub values: Array2<f64>,
    pub precision: Precision,
}

/// Read a 2-D `.npy` array as `f64`.
///
/// `float64` arrays are read as-is and `float32` arrays are widened. Any other
/// dtype, or an array that is not 2-D, is an error naming the file.
pub fn load_array<P: AsRef<Path>>(path: P) -> Result<Array2<f64>> {
    Ok(load_array_with_precision(path)?.values)
}

/// Like [`load_array`], also reporting whether the file held `float32` data.
pub fn load_array_with_precision<P: AsRef<Path>>(path: P) -> Result<NpyArray> {
    let path = path.as_ref();
    match Array2::<f64>::read_npy(open(path)?) {
        Ok(values) => Ok(NpyArray {
            values,
            precision: Precision::Double,
        }),
        Err(ReadNpyError::WrongDescriptor(_)) => {
            let narrow = Array2::<f32>::read_npy(open(path)?)
                .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
            log::debug!("Widening float32 array from {}", path.display());
            Ok(NpyArray {
                values: narrow.mapv(f64::from),
                precision: Precision::Single,
            })
        }
        Err(e) => Err(anyhow!("Failed to read {}: {}", path.display(), e)),
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open array file: {}", path.display()))?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};
    use ndarray_npy::write_npy;

    #[test]
    fn reads_f64_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.npy");
        let a = array![[1.0f64, 2.0], [3.0, -4.5]];
        write_npy(&path, &a).unwrap();
        assert_eq!(load_array(&path).unwrap(), a);
        assert_eq!(load_array_with_precision(&path).unwrap().precision, Precision::Double);
    }

    #[test]
    fn widens_f32_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.npy");
        write_npy(&path, &array![[0.5f32, 0.25]]).unwrap();
        let loaded = load_array_with_precision(&path).unwrap();
        assert_eq!(loaded.values, array![[0.5f64, 0.25]]);
        assert_eq!(loaded.precision, Precision::Single);
    }

    #[test]
    fn rejects_wrong_ndim_and_dtype() {
        let dir = tempfile::tempdir().unwrap();
        let one_d = dir.path().join("one_d.npy");
        write_npy(&one_d, &Array1::<f64>::zeros(3)).unwrap();
        let err = load_array(&one_d).unwrap_err();
        assert!(err.to_string().contains("one_d.npy"));

        let ints = dir.path().join("ints.npy");
        write_npy(&ints, &array![[1i64, 2]]).unwrap();
        assert!(load_array(&ints).is_err());
    }

    #[test]
    fn missing_file_names_path() {
        let err = load_array("/nonexistent/theta.npy").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/theta.npy"));
    }
}
