mod acquisition;


pub use acquisition::PagingAcquisition;
