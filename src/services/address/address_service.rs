//! 주소 기준 데이터 서비스
//!
//! 시/도(`AddressDepth1`)와 시/군/구(`AddressDepth2`) 조회, 기본 지역 시드를 담당합니다.

use std::sync::Arc;
use log::info;
use singleton_macro::service;
use crate::{
    domain::entities::address::{AddressDepth1, AddressDepth2},
    errors::AppError,
    repositories::address::AddressStore,
};

/// 셋업 시 등록하는 기본 지역 (시/도, 하위 시/군/구)
pub const DEFAULT_REGIONS: &[(&str, &[&str])] = &[
    ("서울시", &["강남구"]),
];

#[service(name = "address")]
pub struct AddressService {
    address_store: Arc<dyn AddressStore>,
}

impl AddressService {
    /// 레지스트리를 거치지 않고 주어진 저장소로 생성합니다.
    pub fn with_store(address_store: Arc<dyn AddressStore>) -> Self {
        Self { address_store }
    }

    /// 전체 시/도
    pub async fn list_regions(&self) -> Result<Vec<AddressDepth1>, AppError> {
        self.address_store.find_all_depth1().await
    }

    /// 시/도에 속한 시/군/구
    pub async fn list_sub_regions(&self, depth1_id: i64) -> Result<Vec<AddressDepth2>, AppError> {
        self.address_store.find_depth2_by_depth1_id(depth1_id).await
    }

    /// 기본 지역을 등록하고 새로 만든 행 수를 반환합니다.
    ///
    /// 이미 있는 행은 건너뛰므로 여러 번 실행해도 결과가 같습니다.
    pub async fn seed_default_regions(&self) -> Result<usize, AppError> {
        let mut created = 0;

        for (depth1_name, depth2_names) in DEFAULT_REGIONS {
            let depth1 = match self.address_store.find_depth1_by_name(depth1_name).await? {
                Some(existing) => existing,
                None => {
                    let id = self.address_store.next_depth1_id().await?;
                    let depth1 = AddressDepth1::new(id, depth1_name)?;
                    self.address_store.insert_depth1(&depth1).await?;
                    created += 1;
                    depth1
                }
            };

            for depth2_name in depth2_names.iter() {
                if self.address_store.find_depth2_by_name(depth1.id, depth2_name).await?.is_some() {
                    continue;
                }

                let id = self.address_store.next_depth2_id().await?;
                let depth2 = AddressDepth2::new(id, depth2_name, &depth1)?;
                self.address_store.insert_depth2(&depth2).await?;
                created += 1;
            }
        }

        info!("기본 지역 시드 완료: 신규 {}건", created);
        Ok(created)
    }
}
