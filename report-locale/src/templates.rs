//! Raw report markup. `{level}` and `{score}` are substituted by
//! [`crate::report_html`].

pub const REPORT_TWO_COLUMNS_HTML_EN: &str = r#"
<div class="report-layout">
  <div class="report-row">
    <div class="report-card">
      <h4>🔍 Summary</h4>
      <ul>
        <li>Forklift operating in a warehouse aisle with pedestrians working in close proximity, indicating insufficient separation between personnel and equipment.</li>
      </ul>
    </div>
    <div class="report-card">
      <h4>⚠️ Risk Level</h4>
      <ul>
        <li><strong>{level}</strong></li>
        <li>Risk Score: <strong>{score} / 100</strong></li>
      </ul>
    </div>
  </div>
  <div class="report-row">
    <div class="report-card">
      <h4>👀 Observation</h4>
      <ul>
        <li>A forklift is actively transporting palletized goods within a warehouse rack aisle</li>
        <li>Multiple workers and pedestrians are present in the same aisle during forklift operation</li>
        <li>Personnel are positioned very close to the forklift's travel path</li>
        <li>Work activities such as box handling are occurring simultaneously with vehicle movement</li>
        <li>Clear separation between pedestrian walkways and forklift operating routes is not observed</li>
      </ul>
    </div>
    <div class="report-card">
      <h4>✅ Recommended Actions</h4>
      <ol>
        <li><strong>Immediately restrict pedestrian access</strong> to forklift operating aisles during active transport</li>
        <li><strong>Implement physical separation</strong> (floor markings, cones, barriers) between pedestrian and equipment routes</li>
        <li>Assign a <strong>spotter or traffic controller</strong> when forklift operations occur in shared spaces</li>
        <li>Reinforce safety procedures regarding <strong>forklift blind spots, stopping distance, and turning radius</strong></li>
      </ol>
    </div>
  </div>
  <div class="report-row">
    <div class="report-card">
      <h4>📘 Safety Guideline Reference</h4>
      <p class="report-quote">Forklift operation and pedestrian traffic separation guidelines</p>
    </div>
    <div class="report-card">
      <h4>🖼️ Visual Indicators</h4>
      <ul>
        <li><strong>Highlighted Object:</strong> Forklift-pedestrian interaction zone</li>
        <li><strong>Highlight Style:</strong> 🔴 Red danger zone overlay</li>
      </ul>
    </div>
  </div>
</div>
"#;

pub const REPORT_TWO_COLUMNS_HTML_KO: &str = r#"
<div class="report-layout">
  <div class="report-row">
    <div class="report-card">
      <h4>🔍 요약</h4>
      <ul>
        <li>창고 랙 통로에서 지게차가 운행 중이며 보행자가 근접 작업 중이어서, 인원과 장비 간 분리가 불충분합니다.</li>
      </ul>
    </div>
    <div class="report-card">
      <h4>⚠️ 위험 수준</h4>
      <ul>
        <li><strong>{level}</strong></li>
        <li>위험 점수: <strong>{score} / 100</strong></li>
      </ul>
    </div>
  </div>
  <div class="report-row">
    <div class="report-card">
      <h4>👀 관찰 내용</h4>
      <ul>
        <li>지게차가 창고 랙 통로에서 팔레트 화물을 운반하고 있습니다</li>
        <li>지게차 운행 중 동일 통로에 다수의 작업자와 보행자가 함께 있습니다</li>
        <li>인원이 지게차 주행 경로와 매우 근접해 있습니다</li>
        <li>차량 이동과 동시에 박스 취급 등 작업이 병행되고 있습니다</li>
        <li>보행자 동선과 지게차 운행 동선의 명확한 분리가 확인되지 않습니다</li>
      </ul>
    </div>
    <div class="report-card">
      <h4>✅ 권고 조치</h4>
      <ol>
        <li>지게차 운행 중 통로에 대한 <strong>보행자 접근을 즉시 제한</strong>합니다</li>
        <li>보행자/장비 동선 사이에 <strong>물리적 분리 수단</strong>(바닥 표시, 콘, 차단대)을 적용합니다</li>
        <li>공유 작업 공간에서 지게차 운행 시 <strong>유도자(스포터) 또는 교통 통제 담당자</strong>를 배치합니다</li>
        <li><strong>지게차 사각지대, 제동거리, 회전 반경</strong> 관련 안전 절차를 재강화합니다</li>
      </ol>
    </div>
  </div>
  <div class="report-row">
    <div class="report-card">
      <h4>📘 안전 지침 참고</h4>
      <p class="report-quote">지게차 운행 및 보행자 동선 분리 지침</p>
    </div>
    <div class="report-card">
      <h4>🖼️ 시각적 지표</h4>
      <ul>
        <li><strong>강조 대상:</strong> 지게차-보행자 상호작용 구역</li>
        <li><strong>강조 방식:</strong> 🔴 적색 위험 구역 오버레이</li>
      </ul>
    </div>
  </div>
</div>
"#;

/// Robot avatar shown next to the scene description, inlined so the page has
/// no extra asset dependency.
pub const ROBOT_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64" width="64" height="64">
  <rect x="14" y="16" width="36" height="36" rx="8" fill="#1f2937"/>
  <circle cx="26" cy="32" r="4" fill="#60a5fa"/>
  <circle cx="38" cy="32" r="4" fill="#60a5fa"/>
  <rect x="24" y="41" width="16" height="4" rx="2" fill="#93c5fd"/>
  <rect x="9" y="26" width="5" height="12" rx="2" fill="#4b5563"/>
  <rect x="50" y="26" width="5" height="12" rx="2" fill="#4b5563"/>
  <rect x="28" y="8" width="8" height="8" rx="2" fill="#1f2937"/>
  <circle cx="32" cy="8" r="2.5" fill="#f59e0b"/>
</svg>"##;
