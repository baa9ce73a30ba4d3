//! 공랭식 응축 코일 관련 계산 모듈을 모아둔다.
//! 현재는 공기측 열전달(풍속, Re, Nu, U, LMTD, 필요 전열면적) 계산으로 구성한다.

pub mod condenser;
