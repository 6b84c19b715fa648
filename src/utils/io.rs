use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Read a whole file into memory
pub async fn read_all(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut file = File::open(path).await?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf).await?;
    Ok(buf)
}
