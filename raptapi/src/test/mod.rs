pub use recorder::Recorder;


mod connection;
