//! Загрузка записей датасета из CSV и JSON

use std::fs::File;
use std::path::Path;

use csv::Reader;

use crate::error::MlError;
use crate::types::HousingRecord;

/// Адаптер источника данных: ядру нужны только записи, формат файла -
/// забота этого модуля.
pub struct DataLoader;

impl DataLoader {
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<HousingRecord>, MlError> {
        let file = File::open(path)?;
        let mut reader = Reader::from_reader(file);

        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: HousingRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Vec<HousingRecord>, MlError> {
        let file = File::open(path)?;
        let records: Vec<HousingRecord> = serde_json::from_reader(file)?;
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("housing.csv");

        let mut file = File::create(&path).unwrap();
        writeln!(
            file,
            "MedInc,HouseAge,AveRooms,AveBedrms,Population,AveOccup,Latitude,Longitude,MedHouseVal"
        )
        .unwrap();
        writeln!(file, "8.3252,41.0,6.98,1.02,322.0,2.55,37.88,-122.23,4.526").unwrap();
        writeln!(file, "8.3014,21.0,6.24,0.97,2401.0,2.11,37.86,-122.22,3.585").unwrap();

        let records = DataLoader::load_csv(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert!((records[0].med_inc - 8.3252).abs() < 1e-9);
        assert!((records[1].med_house_val - 3.585).abs() < 1e-9);
    }

    #[test]
    fn test_load_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("housing.json");

        let mut file = File::create(&path).unwrap();
        write!(
            file,
            r#"[{{"MedInc":5.0,"HouseAge":30.0,"AveRooms":6.0,"AveBedrms":1.1,"Population":800.0,"AveOccup":2.8,"Latitude":34.2,"Longitude":-118.4,"MedHouseVal":2.75}}]"#
        )
        .unwrap();

        let records = DataLoader::load_json(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert!((records[0].latitude - 34.2).abs() < 1e-9);
    }

    #[test]
    fn test_load_csv_missing_file() {
        assert!(matches!(
            DataLoader::load_csv("no_such_file.csv"),
            Err(MlError::Io(_))
        ));
    }
}
