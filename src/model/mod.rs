/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// HTTP transport: headers, timeout and the request/response round trip
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
