//! 터미널 출력 포맷팅 유틸리티
//!
//! `eodya_setup` 실행 중 진행 단계와 결과를 터미널에 보여줍니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                   Eodya Setup                    ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Creating indexes
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료와 처리 항목 수를 표시합니다
///
/// ```text
/// ✓ Step 1: Indexes created (4 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 표시합니다
///
/// ```text
///    ├─ users: OK
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 셋업 완료 요약을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                🌸 EODYA DATABASE READY            ║
/// ╚══════════════════════════════════════════════════╝
///    🗄  Database: eodya_dev
///    📑 Indexed collections: 6
///    📍 New regions: 2
/// ```
pub fn print_setup_summary(database_name: &str, indexed_collections: usize, seeded_regions: usize) {
    println!();
    print_boxed_title("🌸 EODYA DATABASE READY");
    println!("   🗄  Database: {}", database_name);
    println!("   📑 Indexed collections: {}", indexed_collections);
    println!("   📍 New regions: {}", seeded_regions);
    println!();
}

/// 레지스트리 초기화 결과를 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║          🎉 SERVICE REGISTRY INITIALIZED         ║
/// ╚══════════════════════════════════════════════════╝
///    📦 Repositories: 7
///    🔧 Services: 4
///    🚀 Total Components: 11
/// ```
pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}

/// 등록 이름 캐시가 채워졌음을 표시합니다
pub fn print_cache_initialized(cache_type: &str, count: usize) {
    println!("   ├─ {} Cache: {} entries loaded", cache_type, count);
}
