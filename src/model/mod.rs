/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/11/25
******************************************************************************/
/// Binary download payloads and content disposition parsing
pub mod download;
/// Response envelope and listing normalization
pub mod envelope;
/// Query building and URL normalization
pub mod http;
/// Multipart upload payloads
pub mod upload;
