use asnranges::{NetworkPrefix, Result};
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Save Reduced Prefixes to CSV File
-------------------------------------------------------------------------------------------------*/

pub fn save(prefixes: &[NetworkPrefix], path: &Path) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)?;

    // Write header
    writer.serialize(&["IP Prefix", "Network Address", "Prefix Length"])?;

    // Write prefix records
    for prefix in prefixes {
        let record = (
            prefix.to_string(),
            prefix.network().to_string(),
            prefix.prefix_len(),
        );
        writer.serialize(record)?;
    }

    writer.flush()?;

    Ok(prefixes.len())
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
