pub mod catcher_page;
pub mod connect_page;
pub mod main_page;
pub mod name_page;
pub mod ranking_page;
pub mod qr_image;
pub mod scan_page;
pub mod toast;

pub use catcher_page::CatcherPage;
pub use connect_page::ConnectPage;
pub use main_page::MainPage;
pub use name_page::NamePage;
pub use ranking_page::RankingPage;
pub use qr_image::{QrImageKind, QrImagePage};
pub use scan_page::ScanPage;
pub use toast::Toast;
