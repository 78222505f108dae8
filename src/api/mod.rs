pub mod musics;
