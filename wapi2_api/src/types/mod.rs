mod chat;
pub use self::chat::{
    DocumentBody, ImageBody, LocationBody, MessageBody, PdfBody, VideoBody,
};
