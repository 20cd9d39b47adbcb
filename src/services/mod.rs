pub mod text_conversion;

pub use text_conversion::{
    convert, convert_directory, ConsoleObserver, ConversionFailure, ConversionObserver,
    ConversionReport, ConvertedFile, ConverterConfig, FailurePolicy, SilentObserver,
};
