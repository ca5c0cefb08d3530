use std::net::{IpAddr, SocketAddr};

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "anagrams", version, about = "Anagram lookups over a static word list")]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, env = "ANAGRAMS_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "ANAGRAMS_PORT", default_value_t = 3001)]
    pub port: u16,

    /// Word list, one word per line: a file path or an http(s) URL
    #[arg(long, env = "ANAGRAMS_WORDS", default_value = "words.txt")]
    pub words: String,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
